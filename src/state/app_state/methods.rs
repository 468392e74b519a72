//! Form editing and lifecycle methods for `AppState`.

use std::time::Instant;

use crate::logic::{ViolationReport, validate};
use crate::state::modal::Modal;
use crate::state::types::{Focus, FormValues, RequiredField};
use crate::theme::Settings;

use super::AppState;

impl AppState {
    /// What: Copy configuration-derived values into the state.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings.
    ///
    /// Output:
    /// - Updates limits, endpoint, timeout and dry-run default, then revalidates.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.limits = settings.choice_limits();
        self.endpoint.clone_from(&settings.submit_endpoint);
        self.submit_timeout = settings.submit_timeout();
        self.dry_run = settings.app_dry_run_default;
        self.revalidate();
    }

    /// Recompute the violation report from the current choices and default.
    pub fn revalidate(&mut self) -> ViolationReport {
        self.report = validate(
            &self.values.choices,
            &self.values.default_choice,
            &self.limits,
        );
        self.report
    }

    /// Replace all form values (e.g. from a restored draft) and revalidate.
    pub fn restore_values(&mut self, values: FormValues) {
        self.values = values;
        self.revalidate();
    }

    /// Text buffer of the focused control, if it is a text input.
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Label => Some(&mut self.values.label),
            Focus::Default => Some(&mut self.values.default_choice),
            Focus::Choices => Some(&mut self.values.choices),
            Focus::Required | Focus::Alphabetical | Focus::Save | Focus::Reset => None,
        }
    }

    /// What: Append a typed character to the focused text input.
    ///
    /// Inputs:
    /// - `ch`: Character to append.
    /// - `now`: Time of the edit, for autosave debouncing.
    ///
    /// Output:
    /// - `true` if a text input consumed the character.
    pub fn insert_char(&mut self, ch: char, now: Instant) -> bool {
        let Some(buf) = self.focused_text_mut() else {
            return false;
        };
        buf.push(ch);
        self.after_edit(now);
        true
    }

    /// What: Start a new choice line in the choices input.
    ///
    /// Output:
    /// - `true` if the choices input has focus and a `\n` was appended.
    pub fn insert_newline(&mut self, now: Instant) -> bool {
        if self.focus != Focus::Choices {
            return false;
        }
        self.values.choices.push('\n');
        self.after_edit(now);
        true
    }

    /// What: Delete the last character of the focused text input.
    ///
    /// Output:
    /// - `true` if a character was removed.
    pub fn backspace(&mut self, now: Instant) -> bool {
        let removed = self.focused_text_mut().and_then(String::pop).is_some();
        if removed {
            self.after_edit(now);
        }
        removed
    }

    /// What: Toggle the focused checkbox.
    ///
    /// Output:
    /// - `true` if a checkbox has focus and was toggled.
    pub fn toggle_focused(&mut self, now: Instant) -> bool {
        match self.focus {
            Focus::Required => self.values.required = !self.values.required,
            Focus::Alphabetical => self.values.display_alpha = !self.values.display_alpha,
            Focus::Label | Focus::Default | Focus::Choices | Focus::Save | Focus::Reset => {
                return false;
            }
        }
        self.autosave.mark_dirty(now);
        true
    }

    /// What: Bookkeeping after any text edit.
    ///
    /// Details:
    /// - Marks the draft dirty on every edit.
    /// - Revalidates only when the edit touched the choices or the default,
    ///   the two inputs the report depends on.
    fn after_edit(&mut self, now: Instant) {
        self.autosave.mark_dirty(now);
        if matches!(self.focus, Focus::Choices | Focus::Default) {
            let report = self.revalidate();
            tracing::debug!(
                duplicate = report.duplicate,
                too_many_unique = report.too_many_unique,
                choice_too_long = report.choice_too_long,
                "[Form] Choices revalidated"
            );
        }
    }

    /// Required inputs that are currently empty.
    #[must_use]
    pub fn missing_required(&self) -> Vec<RequiredField> {
        crate::logic::missing_required(&self.values)
    }

    /// What: Clear the whole form back to its initial state.
    ///
    /// Details:
    /// - Also deletes the autosaved draft so a restart comes up empty.
    pub fn reset_form(&mut self) {
        self.values = FormValues::default();
        self.focus = Focus::default();
        self.report = ViolationReport::default();
        self.saved_changes = false;
        self.banner_visible = false;
        self.modal = Modal::None;
        self.autosave.clear();
        tracing::info!("[Form] Reset");
    }

    /// What: Handle a dismiss request (Esc).
    ///
    /// Output:
    /// - `true` if an overlay or the success banner was closed.
    pub fn dismiss(&mut self) -> bool {
        if self.modal.is_open() {
            self.modal = Modal::None;
            return true;
        }
        if self.saved_changes && self.banner_visible {
            self.banner_visible = false;
            return true;
        }
        false
    }
}
