use crate::state::AppState;

use super::channels::Channels;

/// What: Clean up application state and flush the draft on exit.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels
///
/// Details:
/// - Signals the event reading thread to exit
/// - Writes pending edits regardless of the debounce window
pub fn cleanup_on_exit(app: &mut AppState, channels: &Channels) {
    tracing::debug!("[Runtime] Main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    let values = &app.values;
    app.autosave.flush(values);
}
