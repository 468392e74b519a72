//! Startup: settings, autosave and CLI overrides.

use crate::app::persist::Autosave;
use crate::state::AppState;
use crate::theme::{draft_path, ensure_settings_keys_present, settings};

/// What: Populate the initial state from settings, the stored draft and CLI flags.
///
/// Inputs:
/// - `app`: Fresh application state.
/// - `dry_run_flag`: `--dry-run` was given; forces dry-run on.
/// - `endpoint`: `--endpoint` override, if any.
/// - `headless`: Test mode; skips touching the config directory and drafts.
///
/// Details:
/// - Missing settings keys are appended to `settings.conf` with their defaults.
/// - A stored draft is restored and revalidated so alerts show immediately.
pub fn initialize_app_state(
    app: &mut AppState,
    dry_run_flag: bool,
    endpoint: Option<String>,
    headless: bool,
) {
    let prefs = settings();
    if !headless {
        ensure_settings_keys_present(&prefs);
    }
    app.apply_settings(&prefs);

    if dry_run_flag {
        app.dry_run = true;
    }
    if let Some(url) = endpoint {
        tracing::info!(endpoint = %url, "[Init] Endpoint overridden on the command line");
        app.endpoint = url;
    }

    if headless || !prefs.autosave_enabled {
        app.autosave = Autosave::disabled();
    } else {
        app.autosave = Autosave::new(draft_path(), prefs.autosave_debounce());
        if let Some(values) = app.autosave.load() {
            app.restore_values(values);
        }
    }

    tracing::info!(
        endpoint = %app.endpoint,
        dry_run = app.dry_run,
        unique_ceiling = app.limits.unique_ceiling,
        max_choice_chars = ?app.limits.max_choice_chars,
        autosave = app.autosave.is_enabled(),
        "[Init] Application state ready"
    );
}
