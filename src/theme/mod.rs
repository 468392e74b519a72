//! Theme palette, settings and config paths for fieldwright.
//!
//! Public re-exports keep the `crate::theme::*` API flat.

/// Configuration file seeding.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Built-in palette.
mod store;
/// Theme and settings type definitions.
mod types;

pub use config::{
    SETTINGS_SKELETON_CONTENT, ensure_settings_keys_at, ensure_settings_keys_present,
};
pub use paths::{config_dir, draft_path, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use store::theme;
pub use types::{DEFAULT_SUBMIT_ENDPOINT, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize filesystem-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
