use crossbeam_channel::{Receiver, Sender};

// The two ways the editor is allowed to change a macro. Both are fire and
// forget: the store applies them (or not) and we see the result on the next
// frame when we re-read the macro.
pub trait MacroContext {
    // index into MacroType::ALL
    fn update_macro_type(&mut self, index: usize);
    // None clears the count, i.e. loop forever
    fn update_loop_count(&mut self, count: Option<u32>);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MacroCommand {
    SetMacroType(usize),
    SetLoopCount(Option<u32>),
}

// Context for the main loop: queues commands for the store, which drains
// them once per frame.
pub struct ChannelContext {
    tx: Sender<MacroCommand>,
}

impl ChannelContext {
    pub fn send(&self, cmd: MacroCommand) {
        log::debug!("queue {:?}", cmd);
        if self.tx.try_send(cmd).is_err() {
            log::warn!("macro command queue full or closed, dropping command");
        }
    }
}

impl MacroContext for ChannelContext {
    fn update_macro_type(&mut self, index: usize) {
        self.send(MacroCommand::SetMacroType(index));
    }

    fn update_loop_count(&mut self, count: Option<u32>) {
        self.send(MacroCommand::SetLoopCount(count));
    }
}

pub fn channel() -> (ChannelContext, Receiver<MacroCommand>) {
    let (tx, rx) = crossbeam_channel::bounded::<MacroCommand>(64);
    (ChannelContext { tx }, rx)
}
