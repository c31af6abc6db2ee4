//! Cooperative cancellation driven by termination signals

use crate::io::error::{Result, StarloopError};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Shared flag telling the image loop to stop before its next image
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Cancel `token` `grace` after the first SIGTERM or SIGINT
///
/// The watcher runs on its own thread for the rest of the process. Images
/// started before the grace period ends are allowed to finish; the loop
/// only observes the token between images.
///
/// # Errors
///
/// Returns an error if the signal handlers or the watcher thread cannot be set up
pub fn spawn_signal_watcher(token: CancellationToken, grace: Duration) -> Result<JoinHandle<()>> {
    let mut signals = Signals::new([SIGTERM, SIGINT]).map_err(|source| StarloopError::Signal {
        operation: "register handlers",
        source,
    })?;

    thread::Builder::new()
        .name("signal-watcher".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                tracing::info!(
                    signal,
                    grace_secs = grace.as_secs_f64(),
                    "termination signal received, shutting down gracefully"
                );
                thread::sleep(grace);
                token.cancel();
            }
        })
        .map_err(|source| StarloopError::Signal {
            operation: "spawn watcher thread",
            source,
        })
}
