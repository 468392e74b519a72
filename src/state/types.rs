//! Core value types used by fieldwright state.

use serde::{Deserialize, Serialize};

/// Current values of every input on the builder form.
///
/// This is the snapshot handed to the validator on each edit, to the payload
/// builder on submit, and to the autosave adapter whenever it flushes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    /// Field label shown to end users.
    pub label: String,
    /// Whether end users must pick a value.
    pub required: bool,
    /// Default choice, pre-selected when the field is first shown.
    pub default_choice: String,
    /// Raw choices text, one choice per line.
    pub choices: String,
    /// Whether choices should be displayed in alphabetical order.
    pub display_alpha: bool,
}

/// Which form control currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Single-line label input.
    #[default]
    Label,
    /// "A Value is required" checkbox.
    Required,
    /// Single-line default value input.
    Default,
    /// Multi-line choices input.
    Choices,
    /// "Display choices in alphabetical order" checkbox.
    Alphabetical,
    /// "Save Changes" button.
    Save,
    /// "Reset Form" button.
    Reset,
}

impl Focus {
    /// Focus order used by Tab / Shift+Tab.
    pub const ORDER: [Self; 7] = [
        Self::Label,
        Self::Required,
        Self::Default,
        Self::Choices,
        Self::Alphabetical,
        Self::Save,
        Self::Reset,
    ];

    /// Position of this control in [`Focus::ORDER`].
    const fn index(self) -> usize {
        match self {
            Self::Label => 0,
            Self::Required => 1,
            Self::Default => 2,
            Self::Choices => 3,
            Self::Alphabetical => 4,
            Self::Save => 5,
            Self::Reset => 6,
        }
    }

    /// Next control, wrapping from the last to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping from the first to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether the control accepts typed text.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Label | Self::Default | Self::Choices)
    }
}

/// Inputs that must be filled before the form can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// The label input.
    Label,
    /// The default value input.
    Default,
}

impl RequiredField {
    /// Display name used in alerts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Label => "Label",
            Self::Default => "Default Value",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Tab order visits every control and wraps in both directions.
    ///
    /// Inputs:
    /// - Repeated `next()` / `prev()` from `Label`
    ///
    /// Output:
    /// - Seven steps return to `Label`; `prev()` of `Label` is `Reset`
    fn focus_cycles_through_all_controls() {
        let mut f = Focus::Label;
        for _ in 0..Focus::ORDER.len() {
            f = f.next();
        }
        assert_eq!(f, Focus::Label);
        assert_eq!(Focus::Label.prev(), Focus::Reset);
        assert_eq!(Focus::Reset.next(), Focus::Label);
        assert_eq!(Focus::Choices.next(), Focus::Alphabetical);
    }

    #[test]
    /// What: Missing keys in a stored snapshot fall back to defaults.
    fn form_values_deserialize_with_missing_keys() {
        let v: FormValues =
            serde_json::from_str(r#"{"label":"Colors"}"#).expect("partial snapshot parses");
        assert_eq!(v.label, "Colors");
        assert!(!v.required);
        assert!(v.choices.is_empty());
    }
}
