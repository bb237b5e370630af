use crate::pipeline::macro_def::MacroType;

/// One entry of the type selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub value: MacroType,
    pub label: &'static str,
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub enabled: bool,
}

// Rendered in this order; position here is the index sent to the store.
// On hold has no playback support yet, so it is shown but can't be picked.
pub const VARIANTS: [VariantDescriptor; 3] = [
    VariantDescriptor {
        value: MacroType::Single,
        label: "Single",
        icon: "→",
        tooltip: "Single: Play once",
        enabled: true,
    },
    VariantDescriptor {
        value: MacroType::Toggle,
        label: "Toggle",
        icon: "⟳",
        tooltip: "Toggle: Loop continuously until triggered again",
        enabled: true,
    },
    VariantDescriptor {
        value: MacroType::OnHold,
        label: "On Hold",
        icon: "⤓",
        tooltip: "On Hold: Play while held (Not yet implemented)",
        enabled: false,
    },
];

pub fn descriptor(index: usize) -> Option<&'static VariantDescriptor> {
    VARIANTS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_declaration_order() {
        for (i, d) in VARIANTS.iter().enumerate() {
            assert_eq!(d.value.index(), i);
        }
    }

    #[test]
    fn only_on_hold_is_disabled() {
        let disabled: Vec<MacroType> = VARIANTS
            .iter()
            .filter(|d| !d.enabled)
            .map(|d| d.value)
            .collect();
        assert_eq!(disabled, vec![MacroType::OnHold]);
    }

    #[test]
    fn descriptor_out_of_range() {
        assert!(descriptor(2).is_some());
        assert!(descriptor(3).is_none());
    }
}
