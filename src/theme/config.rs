//! Settings file seeding and maintenance.

/// Appends missing keys to `settings.conf`.
mod settings_ensure;
/// Built-in default file contents.
mod skeletons;

pub use settings_ensure::{ensure_settings_keys_at, ensure_settings_keys_present};
pub use skeletons::SETTINGS_SKELETON_CONTENT;
