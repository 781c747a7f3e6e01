//! One-shot background load of the catalog at startup.
//!
//! The parse runs on a plain worker thread and delivers its result over
//! an mpsc channel; the UI polls the receiver each frame. A failed load
//! is surfaced as a distinct state instead of a silently empty store.

use std::sync::mpsc::{channel, Receiver};
use std::thread;

use crsp_types::Result;

use crate::catalog::Catalog;

/// Load progress as observed by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Background load still running
    Loading,
    /// Catalog parsed and ready
    Ready,
    /// Load failed; the message is shown to the user
    Failed(String),
}

impl LoadState {
    /// Resolve the worker's message into a terminal state.
    ///
    /// `None` means the channel disconnected without delivering a
    /// result (the worker died), which counts as a failed load. The
    /// catalog is handed back alongside the state on success.
    pub fn from_result(result: Option<Result<Catalog>>) -> (LoadState, Option<Catalog>) {
        match result {
            Some(Ok(catalog)) => (LoadState::Ready, Some(catalog)),
            Some(Err(e)) => (LoadState::Failed(e.to_string()), None),
            None => (
                LoadState::Failed("catalog load worker stopped".to_string()),
                None,
            ),
        }
    }
}

/// Spawn the catalog load on a background thread.
///
/// The returned receiver yields exactly one message. If the worker
/// panics the channel disconnects, which callers should treat the same
/// as a failed load.
pub fn spawn_load() -> Receiver<Result<Catalog>> {
    let (tx, rx) = channel();

    thread::spawn(move || {
        let result = Catalog::load_bundled();
        if let Err(e) = &result {
            log::error!("catalog load failed: {e}");
        }
        // Receiver may be gone if the app shut down mid-load
        let _ = tx.send(result);
    });

    rx
}
