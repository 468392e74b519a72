use std::fs;
use std::path::Path;

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;

mod parse_settings;

pub use parse_settings::parse_settings;

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or unreadable.
#[must_use]
pub fn settings() -> Settings {
    resolve_settings_config_path().map_or_else(Settings::default, |p| load_settings_from(&p))
}

/// What: Load settings from an explicit file path.
///
/// Inputs:
/// - `path`: Settings file to read.
///
/// Output:
/// - Parsed `Settings`, or defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::debug!(path = %path.display(), "[Config] Loaded settings");
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Config] Failed to read settings; using defaults"
            );
        }
    }
    out
}
