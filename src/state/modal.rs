//! Modal dialog state for the UI.

/// Overlay shown on top of the form, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Dismissible message (submission failures, blocked submits).
    Alert {
        /// Text to display.
        message: String,
    },
    /// Key binding overview.
    Help,
}

impl Modal {
    /// Whether any overlay is currently shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
