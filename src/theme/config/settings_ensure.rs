use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::theme::config::skeletons::SETTINGS_SKELETON_CONTENT;
use crate::theme::parsing::normalize_key;
use crate::theme::paths::default_settings_path;
use crate::theme::types::Settings;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// What: Ensure all expected settings keys exist in `settings.conf`, appending defaults as needed.
///
/// Inputs:
/// - `prefs`: Current in-memory settings whose values seed the file when keys are missing.
///
/// Output:
/// - None.
///
/// Details:
/// - Resolves the HOME/XDG settings path and delegates to [`ensure_settings_keys_at`].
pub fn ensure_settings_keys_present(prefs: &Settings) {
    ensure_settings_keys_at(&default_settings_path(), prefs);
}

/// What: Ensure all expected settings keys exist in the given file.
///
/// Inputs:
/// - `path`: Settings file to create or extend.
/// - `prefs`: Values used for keys that are missing.
///
/// Output:
/// - `true` when the file was written.
///
/// Details:
/// - Preserves existing lines and comments while adding only absent keys.
/// - Creates the settings file from the skeleton when it is missing or empty.
pub fn ensure_settings_keys_at(path: &Path, prefs: &Settings) -> bool {
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let existing = fs::read_to_string(path).unwrap_or_default();
    let created_new = existing.trim().is_empty();
    let mut lines: Vec<String> = if created_new {
        SETTINGS_SKELETON_CONTENT.lines().map(str::to_string).collect()
    } else {
        existing.lines().map(str::to_string).collect()
    };

    let have: HashSet<String> = lines
        .iter()
        .filter(|l| !skip_comment_or_empty(l))
        .filter_map(|l| parse_key_value(l))
        .map(|(k, _)| normalize_key(&k))
        .collect();

    let pairs: [(&str, String); 7] = [
        ("submit_endpoint", prefs.submit_endpoint.clone()),
        ("submit_timeout_secs", prefs.submit_timeout_secs.to_string()),
        (
            "app_dry_run_default",
            prefs.app_dry_run_default.to_string(),
        ),
        (
            "unique_choice_ceiling",
            prefs.unique_choice_ceiling.to_string(),
        ),
        (
            "max_choice_chars",
            prefs
                .max_choice_chars
                .map_or_else(|| "off".to_string(), |v| v.to_string()),
        ),
        ("autosave_enabled", prefs.autosave_enabled.to_string()),
        (
            "autosave_debounce_ms",
            prefs.autosave_debounce_ms.to_string(),
        ),
    ];
    let mut appended_any = false;
    for (k, v) in &pairs {
        if !have.contains(*k) {
            lines.push(format!("{k} = {v}"));
            appended_any = true;
        }
    }
    if !(created_new || appended_any) {
        return false;
    }
    let mut new_content = lines.join("\n");
    new_content.push('\n');
    match fs::write(path, new_content) {
        Ok(()) => {
            tracing::info!(
                path = %path.display(),
                created = created_new,
                "[Config] Wrote settings defaults"
            );
            true
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Config] Failed to write settings");
            false
        }
    }
}
