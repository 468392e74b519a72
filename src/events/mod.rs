//! Event handling layer for the fieldwright TUI.
//!
//! `handle_event` dispatches overlay keys and global shortcuts here and
//! delegates form editing to [`form`].

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::sources::SubmitRequest;
use crate::state::{AppState, Modal};

mod form;

pub use form::request_submit;


/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from the reader thread.
/// - `app`: Mutable application state.
/// - `submit_tx`: Channel to the submit worker.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    if is_quit(&ke) {
        return true;
    }

    if app.modal.is_open() {
        handle_modal_key(ke, app);
        return false;
    }

    if handle_global_key(ke, app, submit_tx) {
        return false;
    }

    form::handle_form_key(ke, app, submit_tx);
    false
}

/// Ctrl+C and Ctrl+Q exit from anywhere.
fn is_quit(ke: &KeyEvent) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(ke.code, KeyCode::Char('c' | 'q'))
}

/// What: Keys while an overlay is open.
///
/// Details:
/// - Esc and Enter close the Alert or Help overlay; everything else is swallowed.
fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    if matches!(ke.code, KeyCode::Esc | KeyCode::Enter) {
        app.modal = Modal::None;
    }
}

/// What: Shortcuts that work regardless of focus.
///
/// Output:
/// - `true` when the key was consumed.
fn handle_global_key(
    ke: KeyEvent,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<SubmitRequest>,
) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            true
        }
        KeyCode::Esc => {
            app.dismiss();
            true
        }
        KeyCode::Char('s') if ctrl => {
            request_submit(app, submit_tx);
            true
        }
        KeyCode::Char('r') if ctrl => {
            app.reset_form();
            true
        }
        _ => false,
    }
}
