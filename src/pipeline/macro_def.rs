// the macro record as the store hands it to us. we only ever read it;
// changes go through the context callbacks.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MacroType {
    #[default]
    Single,
    Toggle,
    OnHold,
}

impl MacroType {
    // declaration order, the type index the store understands is the position in here
    pub const ALL: [MacroType; 3] = [MacroType::Single, MacroType::Toggle, MacroType::OnHold];

    pub fn index(self) -> usize {
        match self {
            MacroType::Single => 0,
            MacroType::Toggle => 1,
            MacroType::OnHold => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    pub macro_type: MacroType,
    // None = loop forever. only means something for toggle macros
    #[serde(default)]
    pub loop_count: Option<u32>,
}

impl Macro {
    pub fn new(macro_type: MacroType, loop_count: Option<u32>) -> Self {
        Self { macro_type, loop_count }
    }

    pub fn is_toggle(&self) -> bool {
        self.macro_type == MacroType::Toggle
    }

    pub fn is_infinite_loop(&self) -> bool {
        self.loop_count.is_none()
    }

    pub fn loop_state(&self) -> LoopState {
        match self.loop_count {
            None => LoopState::Infinite,
            Some(n) => LoopState::Bounded(n),
        }
    }
}

/// Loop configuration of a toggle macro, derived from `Macro::loop_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Infinite,
    Bounded(u32),
}
