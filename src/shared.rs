// Input plan:
//
// Focus (the controls are a ring, left to right):
//   Tab / Right     //  next control
//   BackTab / Left  //  previous control
//   Single  Toggle  OnHold  [Infinite Loop]  [Count]
//                           only shown for toggle macros; count only when not infinite
//
// Activation:
//   Enter / Space   //  SelectVariant(index) on a type button, SetInfinite(!checked) on the checkbox
//
// Count field (when focused):
//   0-9 - .         //  append, CountChanged(text)
//   Backspace       //  remove last char, CountChanged(text)
//   Up / Down       //  stepper +1 / -1, clamped to 1..=10000, CountChanged(text)
//   leaving focus   //  widget clamp: a typed value above 10000 becomes 10000
//
// Quit:
//   Esc             //  Quit
//
// Rendering: the editor projects the current macro into a DisplayState every
// frame and the tui draws only that plus its own focus/text state.

use crate::pipeline::macro_def::MacroType;

pub const LOOP_COUNT_MIN: u32 = 1;
pub const LOOP_COUNT_MAX: u32 = 10_000;
// what unchecking "infinite" starts you on, and what the field shows if it
// somehow has no count to show
pub const DEFAULT_LOOP_COUNT: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    SelectVariant(usize), // type button pressed, index into MacroType::ALL
    SetInfinite(bool),    // checkbox changed to this value
    CountChanged(String), // count field text after the edit
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    pub variants: Vec<VariantView>,
    pub loop_settings: Option<LoopView>, // None unless the macro is a toggle macro
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariantView {
    pub value: MacroType,
    pub label: &'static str,
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub enabled: bool,
    pub active: bool, // matches the macro's current type
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopView {
    pub infinite: bool,
    pub count: Option<u32>, // None while infinite, the count field isn't drawn then
}
