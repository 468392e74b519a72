//! Central `AppState` container.

use std::time::Duration;

use crate::app::persist::Autosave;
use crate::logic::{ChoiceLimits, ViolationReport};
use crate::state::modal::Modal;
use crate::state::types::{Focus, FormValues};

mod default_impl;
mod methods;


/// Global application state shared by the event and UI layers.
///
/// Mutated in response to key input and submit outcomes. The form values are
/// snapshotted to disk by the autosave adapter, never by validation.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    /// Current form values.
    pub values: FormValues,
    /// Control with keyboard focus.
    pub focus: Focus,
    /// Limits the choices are validated against.
    pub limits: ChoiceLimits,
    /// Latest validation outcome driving the alert banners.
    pub report: ViolationReport,
    /// Whether the last submit went through.
    pub saved_changes: bool,
    /// Whether the success banner is still shown (Esc dismisses it).
    pub banner_visible: bool,
    /// A submit is in flight; further submits are ignored.
    pub submitting: bool,
    /// Active overlay.
    pub modal: Modal,
    /// When `true`, submits are logged instead of sent.
    pub dry_run: bool,
    /// URL the configuration is posted to.
    pub endpoint: String,
    /// Per-request submit timeout.
    pub submit_timeout: Duration,
    /// Draft snapshot writer.
    pub autosave: Autosave,
}
