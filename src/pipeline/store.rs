// Stand-in for the macro manager that owns the record. The editor never
// touches this directly, the main loop feeds it whatever the context queued.

use crate::context::{MacroCommand, MacroContext};
use super::macro_def::{Macro, MacroType};

#[derive(Clone, Debug, Default)]
pub struct MacroStore {
    current: Macro,
}

impl MacroStore {
    pub fn new(seed: Macro) -> Self {
        Self { current: seed }
    }

    pub fn current(&self) -> &Macro {
        &self.current
    }

    pub fn apply(&mut self, cmd: MacroCommand) {
        match cmd {
            MacroCommand::SetMacroType(index) => self.update_macro_type(index),
            MacroCommand::SetLoopCount(count) => self.update_loop_count(count),
        }
    }
}

impl MacroContext for MacroStore {
    // loop_count is left alone on a type change so switching back to toggle
    // brings the old setting back
    fn update_macro_type(&mut self, index: usize) {
        match MacroType::from_index(index) {
            Some(ty) => {
                log::info!("macro type -> {:?}", ty);
                self.current.macro_type = ty;
            }
            None => log::warn!("ignoring unknown macro type index {}", index),
        }
    }

    fn update_loop_count(&mut self, count: Option<u32>) {
        log::info!("loop count -> {:?}", count);
        self.current.loop_count = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_change_keeps_loop_count() {
        let mut store = MacroStore::new(Macro::new(MacroType::Toggle, Some(250)));
        store.apply(MacroCommand::SetMacroType(0));
        assert_eq!(store.current(), &Macro::new(MacroType::Single, Some(250)));

        store.apply(MacroCommand::SetMacroType(1));
        assert_eq!(store.current().loop_count, Some(250));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut store = MacroStore::new(Macro::new(MacroType::Toggle, None));
        store.apply(MacroCommand::SetMacroType(7));
        assert_eq!(store.current().macro_type, MacroType::Toggle);
    }

    #[test]
    fn clear_count() {
        let mut store = MacroStore::new(Macro::new(MacroType::Toggle, Some(3)));
        store.apply(MacroCommand::SetLoopCount(None));
        assert!(store.current().is_infinite_loop());
    }
}
