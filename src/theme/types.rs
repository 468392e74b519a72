use std::time::Duration;

use ratatui::style::Color;

use crate::logic::{ChoiceLimits, DEFAULT_MAX_CHOICE_CHARS, DEFAULT_UNIQUE_CHOICE_CEILING};

/// Endpoint the field configuration is posted to when nothing else is configured.
pub const DEFAULT_SUBMIT_ENDPOINT: &str = "https://www.mocky.io/v2/566061f21200008e3aabd919";

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for focus and interactive highlights.
    pub sapphire: Color,
    /// Accent color for headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// URL the field configuration is posted to.
    pub submit_endpoint: String,
    /// Timeout for a single submit request, in seconds.
    pub submit_timeout_secs: u64,
    /// Maximum number of exactly-once choices.
    pub unique_choice_ceiling: usize,
    /// Maximum characters per choice; `None` disables the rule.
    pub max_choice_chars: Option<usize>,
    /// Whether form values are snapshotted to disk while editing.
    pub autosave_enabled: bool,
    /// Quiet period after the last edit before the draft is written.
    pub autosave_debounce_ms: u64,
    /// Default value for the application's dry-run mode on startup.
    /// This can be forced on via the `--dry-run` CLI flag.
    pub app_dry_run_default: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            submit_endpoint: DEFAULT_SUBMIT_ENDPOINT.to_string(),
            submit_timeout_secs: 10,
            unique_choice_ceiling: DEFAULT_UNIQUE_CHOICE_CEILING,
            max_choice_chars: Some(DEFAULT_MAX_CHOICE_CHARS),
            autosave_enabled: true,
            autosave_debounce_ms: 500,
            app_dry_run_default: false,
        }
    }
}

impl Settings {
    /// Validation limits derived from these settings.
    #[must_use]
    pub const fn choice_limits(&self) -> ChoiceLimits {
        ChoiceLimits {
            unique_ceiling: self.unique_choice_ceiling,
            max_choice_chars: self.max_choice_chars,
        }
    }

    /// Submit request timeout.
    #[must_use]
    pub const fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }

    /// Autosave debounce window.
    #[must_use]
    pub const fn autosave_debounce(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }
}
