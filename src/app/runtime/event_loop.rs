use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{handle_submit_outcome, handle_tick};

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for and processes a single message from any channel
/// - Exits when every sender is gone, which only happens in tests
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.submit_req_tx)
        }
        Some(outcome) = channels.submit_res_rx.recv() => {
            handle_submit_outcome(app, outcome);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app);
            false
        }
        else => true,
    }
}

/// What: Run the main event loop, processing all channel messages and rendering the UI.
///
/// Inputs:
/// - `terminal`: Terminal to draw into; `None` in headless mode
/// - `app`: Application state
/// - `channels`: Communication channels
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
