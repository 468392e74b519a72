use ratatui::{Terminal, backend::CrosstermBackend};

use crate::state::AppState;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod cleanup;
mod event_loop;
mod handlers;
mod init;
mod workers;

use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
use init::initialize_app_state;
use workers::{spawn_event_thread, spawn_submit_worker, spawn_tick_worker};

/// Shared result type for runtime plumbing.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the fieldwright TUI end-to-end: initialize terminal and state, spawn
/// background workers, drive the event loop, flush the draft and restore the
/// terminal on exit.
///
/// Inputs:
/// - `dry_run_flag`: When `true`, submits are logged instead of sent (overrides
///   the config default for the session).
/// - `endpoint`: Optional submit URL overriding `settings.conf`.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - `FIELDWRIGHT_TEST_HEADLESS=1` skips raw mode, drawing, the terminal reader
///   and every write under the config directory.
pub async fn run(dry_run_flag: bool, endpoint: Option<String>) -> Result<()> {
    let headless = std::env::var("FIELDWRIGHT_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    initialize_app_state(&mut app, dry_run_flag, endpoint, headless);

    let mut channels = Channels::new();
    spawn_tick_worker(&channels.tick_tx);
    if let Some(req_rx) = channels.submit_req_rx.take() {
        spawn_submit_worker(req_rx, channels.submit_res_tx.clone());
    }
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    cleanup_on_exit(&mut app, &channels);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
