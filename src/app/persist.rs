//! Autosave adapter for the builder form.
//!
//! The adapter only ever sees snapshots of [`FormValues`]; it never validates
//! and validation never touches it. The host marks it dirty on each edit and
//! calls [`Autosave::maybe_flush`] from its tick.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::state::types::FormValues;

/// On-disk shape of an autosaved draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    /// Form values at the time of the write.
    pub values: FormValues,
    /// Local timestamp of the write (RFC 3339).
    pub saved_at: String,
}

/// Debounced writer of form snapshots.
#[derive(Debug, Clone)]
pub struct Autosave {
    /// Draft file; `None` disables every operation.
    path: Option<PathBuf>,
    /// Quiet period after the last edit before a write happens.
    debounce: Duration,
    /// Whether values changed since the last write.
    dirty: bool,
    /// Time of the most recent edit.
    last_change: Option<Instant>,
}

impl Default for Autosave {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Autosave {
    /// Adapter writing to `path` once `debounce` has passed since the last edit.
    #[must_use]
    pub const fn new(path: PathBuf, debounce: Duration) -> Self {
        Self {
            path: Some(path),
            debounce,
            dirty: false,
            last_change: None,
        }
    }

    /// Adapter that never reads or writes.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            path: None,
            debounce: Duration::ZERO,
            dirty: false,
            last_change: None,
        }
    }

    /// Whether a draft path is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Whether there are edits not yet written.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Draft file location, if enabled.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Record that the form changed at `now`.
    pub fn mark_dirty(&mut self, now: Instant) {
        if self.path.is_some() {
            self.dirty = true;
            self.last_change = Some(now);
        }
    }

    /// What: Write the snapshot if dirty and the debounce window has elapsed.
    ///
    /// Inputs:
    /// - `values`: Current form values.
    /// - `now`: Current time, compared against the last edit.
    ///
    /// Output:
    /// - `true` when a write was attempted.
    pub fn maybe_flush(&mut self, values: &FormValues, now: Instant) -> bool {
        if !self.dirty {
            return false;
        }
        let quiet = self
            .last_change
            .is_none_or(|t| now.saturating_duration_since(t) >= self.debounce);
        if !quiet {
            return false;
        }
        self.flush(values)
    }

    /// What: Write the snapshot now if there are unsaved edits.
    ///
    /// Inputs:
    /// - `values`: Current form values.
    ///
    /// Output:
    /// - `true` when a write was attempted.
    ///
    /// Details:
    /// - Clears the dirty flag regardless of the write result to avoid retrying
    ///   a failing write on every tick.
    pub fn flush(&mut self, values: &FormValues) -> bool {
        if !self.dirty {
            return false;
        }
        let Some(path) = self.path.as_deref() else {
            return false;
        };
        self.dirty = false;
        let snapshot = DraftSnapshot {
            values: values.clone(),
            saved_at: chrono::Local::now().to_rfc3339(),
        };
        match serde_json::to_string_pretty(&snapshot) {
            Ok(s) => match fs::write(path, &s) {
                Ok(()) => {
                    tracing::debug!(
                        path = %path.display(),
                        bytes = s.len(),
                        "[Autosave] Draft persisted"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "[Autosave] Failed to write draft"
                    );
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "[Autosave] Failed to serialize draft");
            }
        }
        true
    }

    /// What: Read the last saved draft.
    ///
    /// Output:
    /// - The stored values, or `None` when disabled, missing or corrupt.
    #[must_use]
    pub fn load(&self) -> Option<FormValues> {
        let path = self.path.as_deref()?;
        let text = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<DraftSnapshot>(&text) {
            Ok(snapshot) => {
                tracing::info!(
                    path = %path.display(),
                    saved_at = %snapshot.saved_at,
                    "[Autosave] Restored draft"
                );
                Some(snapshot.values)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[Autosave] Ignoring unreadable draft"
                );
                None
            }
        }
    }

    /// Delete the stored draft and drop pending edits.
    pub fn clear(&mut self) {
        self.dirty = false;
        self.last_change = None;
        let Some(path) = self.path.as_deref() else {
            return;
        };
        match fs::remove_file(path) {
            Ok(()) => tracing::info!(path = %path.display(), "[Autosave] Draft cleared"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Autosave] Failed to clear draft");
            }
        }
    }
}
