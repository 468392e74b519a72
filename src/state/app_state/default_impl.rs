//! Default implementation for `AppState`.

use crate::app::persist::Autosave;
use crate::logic::{ChoiceLimits, ViolationReport};
use crate::state::modal::Modal;
use crate::state::types::{Focus, FormValues};
use crate::theme::Settings;

use super::AppState;

impl Default for AppState {
    fn default() -> Self {
        let settings = Settings::default();
        let submit_timeout = settings.submit_timeout();
        Self {
            values: FormValues::default(),
            focus: Focus::default(),
            limits: ChoiceLimits::default(),
            report: ViolationReport::default(),
            saved_changes: false,
            banner_visible: false,
            submitting: false,
            modal: Modal::None,
            dry_run: settings.app_dry_run_default,
            endpoint: settings.submit_endpoint,
            submit_timeout,
            autosave: Autosave::disabled(),
        }
    }
}
