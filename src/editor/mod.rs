//! The macro type editor: picks a macro's trigger mode and, for toggle
//! macros, how many times it loops.
//!
//! The editor owns no macro state. Every call gets the current `Macro` and a
//! `MacroContext` to send changes through, and each call sends at most one
//! change. What the user sees comes from `display_state`, recomputed from the
//! macro each frame.

pub mod loop_config;
pub mod type_selector;

use crate::context::MacroContext;
use crate::pipeline::macro_def::{LoopState, Macro};
use crate::shared::{DisplayState, InputEvent, LoopView, VariantView};

use loop_config::UpperBound;
use type_selector::VARIANTS;

#[derive(Clone, Debug)]
pub struct MacroTypeEditor {
    bound: UpperBound,
}

impl Default for MacroTypeEditor {
    fn default() -> Self {
        Self::new(UpperBound::Enforce)
    }
}

impl MacroTypeEditor {
    pub fn new(bound: UpperBound) -> Self {
        Self { bound }
    }

    pub fn handle_input<C: MacroContext>(&self, event: InputEvent, current: &Macro, ctx: &mut C) {
        match event {
            InputEvent::SelectVariant(index) => self.select_variant(index, ctx),
            InputEvent::SetInfinite(checked) => self.set_infinite(checked, current, ctx),
            InputEvent::CountChanged(text) => self.change_count(&text, current, ctx),
            InputEvent::Quit => {}
        }
    }

    // No check against the current type: picking the active one sends it again.
    pub fn select_variant<C: MacroContext>(&self, index: usize, ctx: &mut C) {
        match type_selector::descriptor(index) {
            Some(d) if d.enabled => ctx.update_macro_type(index),
            Some(d) => log::debug!("{} is disabled, ignoring selection", d.label),
            None => log::debug!("no macro type at index {}", index),
        }
    }

    pub fn set_infinite<C: MacroContext>(&self, checked: bool, current: &Macro, ctx: &mut C) {
        if !current.is_toggle() {
            log::debug!("loop settings hidden for {:?} macro, ignoring", current.macro_type);
            return;
        }
        ctx.update_loop_count(loop_config::infinite_toggled(checked));
    }

    // Bad edits are dropped without telling anyone, the store keeps the last good count.
    pub fn change_count<C: MacroContext>(&self, text: &str, current: &Macro, ctx: &mut C) {
        if !current.is_toggle() || current.is_infinite_loop() {
            log::debug!("count field hidden, ignoring {:?}", text);
            return;
        }
        match loop_config::parse_count(text, self.bound) {
            Ok(count) => ctx.update_loop_count(Some(count)),
            Err(e) => log::debug!("dropping count edit: {}", e),
        }
    }

    pub fn display_state(&self, current: &Macro) -> DisplayState {
        let variants = VARIANTS
            .iter()
            .map(|d| VariantView {
                value: d.value,
                label: d.label,
                icon: d.icon,
                tooltip: d.tooltip,
                enabled: d.enabled,
                active: d.value == current.macro_type,
            })
            .collect();

        let loop_settings = current.is_toggle().then(|| match current.loop_state() {
            LoopState::Infinite => LoopView { infinite: true, count: None },
            LoopState::Bounded(n) => LoopView { infinite: false, count: Some(n) },
        });

        DisplayState { variants, loop_settings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MacroCommand;
    use crate::pipeline::macro_def::MacroType;
    use crate::pipeline::store::MacroStore;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<MacroCommand>,
    }

    impl MacroContext for Recorder {
        fn update_macro_type(&mut self, index: usize) {
            self.calls.push(MacroCommand::SetMacroType(index));
        }

        fn update_loop_count(&mut self, count: Option<u32>) {
            self.calls.push(MacroCommand::SetLoopCount(count));
        }
    }

    fn toggle(count: Option<u32>) -> Macro {
        Macro::new(MacroType::Toggle, count)
    }

    #[test]
    fn enabled_variants_send_their_index_once() {
        let editor = MacroTypeEditor::default();
        for index in [0, 1] {
            let mut rec = Recorder::default();
            editor.handle_input(InputEvent::SelectVariant(index), &Macro::default(), &mut rec);
            assert_eq!(rec.calls, vec![MacroCommand::SetMacroType(index)]);
        }
    }

    #[test]
    fn on_hold_is_not_selectable() {
        let editor = MacroTypeEditor::default();
        let mut rec = Recorder::default();
        editor.select_variant(2, &mut rec);
        editor.select_variant(3, &mut rec);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn reselecting_active_type_still_sends() {
        let editor = MacroTypeEditor::default();
        let mut rec = Recorder::default();
        editor.handle_input(InputEvent::SelectVariant(1), &toggle(None), &mut rec);
        assert_eq!(rec.calls, vec![MacroCommand::SetMacroType(1)]);
    }

    #[test]
    fn loop_settings_only_for_toggle() {
        let editor = MacroTypeEditor::default();
        for ty in MacroType::ALL {
            let ds = editor.display_state(&Macro::new(ty, Some(5)));
            assert_eq!(ds.loop_settings.is_some(), ty == MacroType::Toggle);
        }
    }

    #[test]
    fn active_variant_is_highlighted() {
        let editor = MacroTypeEditor::default();
        let ds = editor.display_state(&toggle(None));
        let active: Vec<bool> = ds.variants.iter().map(|v| v.active).collect();
        assert_eq!(active, vec![false, true, false]);
        assert!(!ds.variants[2].enabled);
    }

    #[test]
    fn unchecking_infinite_starts_at_ten() {
        let editor = MacroTypeEditor::default();
        let mut rec = Recorder::default();
        editor.handle_input(InputEvent::SetInfinite(false), &toggle(None), &mut rec);
        assert_eq!(rec.calls, vec![MacroCommand::SetLoopCount(Some(10))]);
    }

    #[test]
    fn checking_infinite_clears_any_count() {
        let editor = MacroTypeEditor::default();
        for n in [1, 10, 250, 10_000] {
            let mut rec = Recorder::default();
            editor.handle_input(InputEvent::SetInfinite(true), &toggle(Some(n)), &mut rec);
            assert_eq!(rec.calls, vec![MacroCommand::SetLoopCount(None)]);
        }
    }

    #[test]
    fn invalid_counts_send_nothing() {
        let editor = MacroTypeEditor::default();
        let mut rec = Recorder::default();
        for text in ["0", "-5", "abc", "", "2.5"] {
            editor.handle_input(InputEvent::CountChanged(text.to_string()), &toggle(Some(7)), &mut rec);
        }
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn valid_count_is_sent() {
        let editor = MacroTypeEditor::default();
        let mut rec = Recorder::default();
        editor.handle_input(InputEvent::CountChanged("250".to_string()), &toggle(Some(7)), &mut rec);
        assert_eq!(rec.calls, vec![MacroCommand::SetLoopCount(Some(250))]);
    }

    // Above-max handling is a choice: enforced by default, pass-through when
    // configured to trust the field's clamping.
    #[test]
    fn above_max_count_enforced_by_default() {
        let mut rec = Recorder::default();
        MacroTypeEditor::default().change_count("10001", &toggle(Some(7)), &mut rec);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn above_max_count_passes_with_widget_only_bound() {
        let mut rec = Recorder::default();
        MacroTypeEditor::new(UpperBound::WidgetOnly).change_count("10001", &toggle(Some(7)), &mut rec);
        assert_eq!(rec.calls, vec![MacroCommand::SetLoopCount(Some(10_001))]);
    }

    #[test]
    fn loop_events_ignored_when_hidden() {
        let editor = MacroTypeEditor::default();
        let mut rec = Recorder::default();
        let single = Macro::new(MacroType::Single, Some(5));
        editor.set_infinite(true, &single, &mut rec);
        editor.change_count("20", &single, &mut rec);
        editor.change_count("20", &toggle(None), &mut rec);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn infinite_round_trip_resets_to_default() {
        let editor = MacroTypeEditor::default();
        let mut store = MacroStore::new(toggle(Some(10)));

        let snapshot = store.current().clone();
        editor.change_count("250", &snapshot, &mut store);
        assert_eq!(store.current().loop_count, Some(250));

        let snapshot = store.current().clone();
        editor.set_infinite(true, &snapshot, &mut store);
        assert!(store.current().is_infinite_loop());

        let snapshot = store.current().clone();
        editor.set_infinite(false, &snapshot, &mut store);
        assert_eq!(store.current().loop_count, Some(10));
    }
}
