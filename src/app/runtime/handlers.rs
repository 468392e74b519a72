//! Handlers for messages arriving from background workers.

use std::time::Instant;

use crate::sources::SubmitOutcome;
use crate::state::{AppState, Modal};

/// What: Apply a finished submit to the state.
///
/// Inputs:
/// - `app`: Application state.
/// - `outcome`: Receipt or error message from the submit worker.
///
/// Details:
/// - Success sets `saved_changes` and re-shows the banner.
/// - Failure clears `saved_changes` and raises an Alert with the message.
pub fn handle_submit_outcome(app: &mut AppState, outcome: SubmitOutcome) {
    app.submitting = false;
    match outcome {
        Ok(receipt) => {
            tracing::info!(
                endpoint = %receipt.endpoint,
                status = ?receipt.status,
                "[Runtime] Submit succeeded"
            );
            app.saved_changes = true;
            app.banner_visible = true;
        }
        Err(msg) => {
            tracing::warn!(error = %msg, "[Runtime] Submit failed");
            app.saved_changes = false;
            app.banner_visible = false;
            app.modal = Modal::Alert { message: msg };
        }
    }
}

/// What: Periodic housekeeping.
///
/// Details:
/// - Lets the autosave adapter write once the debounce window has passed.
pub fn handle_tick(app: &mut AppState) {
    let values = &app.values;
    app.autosave.maybe_flush(values, Instant::now());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SubmitReceipt;

    #[test]
    /// What: A successful outcome shows the banner and clears the in-flight flag.
    fn success_sets_banner() {
        let mut app = AppState {
            submitting: true,
            ..AppState::default()
        };
        handle_submit_outcome(
            &mut app,
            Ok(SubmitReceipt {
                status: Some(200),
                endpoint: "http://localhost/".to_string(),
            }),
        );
        assert!(!app.submitting);
        assert!(app.saved_changes);
        assert!(app.banner_visible);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: A failed outcome raises an Alert and hides any previous banner.
    fn failure_raises_alert() {
        let mut app = AppState {
            submitting: true,
            saved_changes: true,
            banner_visible: true,
            ..AppState::default()
        };
        handle_submit_outcome(&mut app, Err("Network error: refused".to_string()));
        assert!(!app.submitting);
        assert!(!app.saved_changes);
        assert!(!app.banner_visible);
        assert_eq!(
            app.modal,
            Modal::Alert {
                message: "Network error: refused".to_string()
            }
        );
    }
}
