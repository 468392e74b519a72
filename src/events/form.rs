//! Form key handling: focus movement, editing and the two buttons.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{SubmitBlocked, build_field_config};
use crate::sources::SubmitRequest;
use crate::state::{AppState, Focus, Modal};

/// What: Handle a key aimed at the form itself.
///
/// Inputs:
/// - `ke`: Key event (already known to be a press with no overlay open).
/// - `app`: Mutable application state.
/// - `submit_tx`: Channel to the submit worker, used by the Save button.
///
/// Details:
/// - Up/Down move focus except inside the multi-line choices input.
/// - Enter inserts a newline in choices and activates the buttons.
pub(super) fn handle_form_key(
    ke: KeyEvent,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) {
    let now = Instant::now();
    match ke.code {
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Down if app.focus != Focus::Choices => app.focus = app.focus.next(),
        KeyCode::Up if app.focus != Focus::Choices => app.focus = app.focus.prev(),
        KeyCode::Enter => match app.focus {
            Focus::Choices => {
                app.insert_newline(now);
            }
            Focus::Save => request_submit(app, submit_tx),
            Focus::Reset => app.reset_form(),
            Focus::Required | Focus::Alphabetical => {
                app.toggle_focused(now);
            }
            Focus::Label | Focus::Default => app.focus = app.focus.next(),
        },
        KeyCode::Backspace => {
            app.backspace(now);
        }
        KeyCode::Char(' ') if !app.focus.is_text() => {
            app.toggle_focused(now);
        }
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.insert_char(ch, now);
        }
        _ => {}
    }
}

/// What: Gate a submit and hand the payload to the submit worker.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `submit_tx`: Channel to the submit worker.
///
/// Output:
/// - Sets `submitting` when the request was queued. A blocked submit clears
///   the success banner; missing required inputs also raise an Alert.
///
/// Details:
/// - Re-runs validation on the current values before building the payload.
/// - Ignored while a previous submit is still in flight.
pub fn request_submit(app: &mut AppState, submit_tx: &mpsc::UnboundedSender<SubmitRequest>) {
    if app.submitting {
        tracing::debug!("[Form] Submit ignored: previous submit still in flight");
        return;
    }
    app.revalidate();
    match build_field_config(&app.values, &app.limits) {
        Ok(config) => {
            let req = SubmitRequest {
                config,
                endpoint: app.endpoint.clone(),
                dry_run: app.dry_run,
                timeout: app.submit_timeout,
            };
            if submit_tx.send(req).is_err() {
                tracing::error!("[Form] Submit worker is gone");
                app.modal = Modal::Alert {
                    message: "Submission is unavailable: background worker stopped".to_string(),
                };
                return;
            }
            app.submitting = true;
            tracing::info!(endpoint = %app.endpoint, dry_run = app.dry_run, "[Form] Submit queued");
        }
        Err(blocked) => {
            app.saved_changes = false;
            app.banner_visible = false;
            tracing::info!(reason = %blocked, "[Form] Submit blocked");
            if let SubmitBlocked::MissingRequired(_) = blocked {
                app.modal = Modal::Alert {
                    message: blocked.to_string(),
                };
            }
        }
    }
}
