use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{SubmitOutcome, SubmitRequest};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Senders and receivers shared by the main event loop and background workers.
/// - The submit request receiver is handed to the submit worker at spawn time.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end of terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Submits queued by the event handlers.
    pub submit_req_tx: mpsc::UnboundedSender<SubmitRequest>,
    /// Taken by the submit worker.
    pub submit_req_rx: Option<mpsc::UnboundedReceiver<SubmitRequest>>,
    /// Outcomes reported by the submit worker.
    pub submit_res_tx: mpsc::UnboundedSender<SubmitOutcome>,
    /// Receiving end of submit outcomes.
    pub submit_res_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Periodic ticks driving autosave.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving end of ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create every runtime channel.
    ///
    /// Output:
    /// - A fresh `Channels` with all pairs connected.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (submit_req_tx, submit_req_rx) = mpsc::unbounded_channel();
        let (submit_res_tx, submit_res_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            submit_req_tx,
            submit_req_rx: Some(submit_req_rx),
            submit_res_tx,
            submit_res_rx,
            tick_tx,
            tick_rx,
        }
    }
}
