//! Autosave across a simulated restart: edits are snapshotted by the adapter
//! and a fresh state restored from the draft shows the same alerts.

use std::time::{Duration, Instant};

use fieldwright::app::persist::Autosave;
use fieldwright::state::{AppState, Focus};

/// What: Type `s` into the focused input at time `at`.
fn type_at(app: &mut AppState, s: &str, at: Instant) {
    for ch in s.chars() {
        if ch == '\n' {
            app.insert_newline(at);
        } else {
            app.insert_char(ch, at);
        }
    }
}

#[test]
/// What: A draft written after the debounce restores into a new session.
///
/// Inputs:
/// - Label and duplicate choices typed at `t0`, ticks at `t0+100ms` and `t0+600ms`
///
/// Output:
/// - No write on the first tick, one on the second; the restored state has
///   the same values and the duplicate flag already raised
fn draft_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("draft.json");
    let t0 = Instant::now();

    let mut first = AppState {
        autosave: Autosave::new(path.clone(), Duration::from_millis(500)),
        ..AppState::default()
    };
    type_at(&mut first, "Colors", t0);
    first.focus = Focus::Choices;
    type_at(&mut first, "Red\nRed", t0);
    assert!(first.report.duplicate);

    assert!(!first.autosave.maybe_flush(&first.values, t0 + Duration::from_millis(100)));
    assert!(!path.exists());
    assert!(first.autosave.maybe_flush(&first.values, t0 + Duration::from_millis(600)));
    assert!(path.exists());

    let mut second = AppState {
        autosave: Autosave::new(path.clone(), Duration::from_millis(500)),
        ..AppState::default()
    };
    let restored = second.autosave.load().expect("draft present");
    second.restore_values(restored);
    assert_eq!(second.values, first.values);
    assert!(second.report.duplicate);
}

#[test]
/// What: Validation alone never writes a draft.
fn validation_does_not_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("draft.json");
    let mut app = AppState {
        autosave: Autosave::new(path.clone(), Duration::ZERO),
        ..AppState::default()
    };
    app.values.choices = "a\na".to_string();
    app.revalidate();
    assert!(!app.autosave.is_dirty());
    assert!(!app.autosave.maybe_flush(&app.values, Instant::now()));
    assert!(!path.exists());
}

#[test]
/// What: Reset removes the draft so the next session starts empty.
fn reset_discards_draft() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("draft.json");
    let mut app = AppState {
        autosave: Autosave::new(path.clone(), Duration::ZERO),
        ..AppState::default()
    };
    type_at(&mut app, "Colors", Instant::now());
    assert!(app.autosave.flush(&app.values));
    app.reset_form();
    assert!(!path.exists());
    assert_eq!(Autosave::new(path, Duration::ZERO).load(), None);
}
