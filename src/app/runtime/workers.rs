//! Background workers: terminal reader thread, tick timer and submit worker.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{SubmitOutcome, SubmitRequest, build_client, submit};

/// Interval between ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// What: Spawn the thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned.
/// - `event_tx`: Channel the events are forwarded to.
/// - `cancelled`: Flag checked between polls to stop the thread.
///
/// Details:
/// - Polls with a 50ms timeout so exit requests are noticed promptly.
/// - Exits when the receiver is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    // ignore transient read errors and continue
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("[Runtime] Event thread stopped");
    });
}

/// What: Spawn the tick worker.
///
/// Details:
/// - Sends a tick every 200ms; stops once the receiver is gone.
pub fn spawn_tick_worker(tick_tx: &mpsc::UnboundedSender<()>) {
    let tick_tx_bg = tick_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx_bg.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the worker that performs submissions one at a time.
///
/// Inputs:
/// - `req_rx`: Submit requests from the event loop.
/// - `res_tx`: Channel the outcomes are reported on.
///
/// Details:
/// - Builds one HTTP client up front and reuses it. If the client cannot be
///   built, every request fails with that message.
pub fn spawn_submit_worker(
    mut req_rx: mpsc::UnboundedReceiver<SubmitRequest>,
    res_tx: mpsc::UnboundedSender<SubmitOutcome>,
) {
    tokio::spawn(async move {
        let client = build_client();
        if let Err(e) = &client {
            tracing::error!(error = %e, "[Submit] HTTP client unavailable");
        }
        while let Some(req) = req_rx.recv().await {
            let outcome = match &client {
                Ok(c) => submit(c, req).await,
                Err(e) => Err(e.clone()),
            };
            if res_tx.send(outcome).is_err() {
                break;
            }
        }
    });
}
