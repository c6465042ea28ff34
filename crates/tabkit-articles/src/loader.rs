//! Background dataset load.
//!
//! The page fetches its dataset once, off the event thread. [`spawn_load`]
//! runs [`load`](crate::load) on a worker thread and hands back a
//! [`PendingLoad`] that the event loop polls.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crate::article::ArticleMap;
use crate::source::{ArticleSource, FetchError, FetchErrorKind, load};

type LoadResult = Result<ArticleMap, FetchError>;

/// Receiver for the outcome of one background load.
///
/// Wraps a [`std::sync::mpsc::Receiver`]. Poll with
/// [`try_recv()`](Self::try_recv) from an event loop, or wait with
/// [`recv()`](Self::recv). The outcome is delivered exactly once.
pub struct PendingLoad {
    rx: mpsc::Receiver<LoadResult>,
    location: String,
    delivered: bool,
}

impl PendingLoad {
    fn new(rx: mpsc::Receiver<LoadResult>, location: String) -> Self {
        Self {
            rx,
            location,
            delivered: false,
        }
    }

    /// Dataset location being loaded.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Whether the outcome has already been handed out.
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    /// Wait for the outcome (blocking).
    ///
    /// Returns `None` if the outcome was already delivered.
    pub fn recv(&mut self) -> Option<LoadResult> {
        if self.delivered {
            return None;
        }
        let result = self.rx.recv().unwrap_or_else(|_| Err(self.worker_lost()));
        self.delivered = true;
        Some(result)
    }

    /// Take the outcome if it is ready, without blocking.
    ///
    /// Returns `None` while the load is running and after the outcome was
    /// delivered.
    pub fn try_recv(&mut self) -> Option<LoadResult> {
        if self.delivered {
            return None;
        }
        let result = match self.rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => Err(self.worker_lost()),
        };
        self.delivered = true;
        Some(result)
    }

    fn worker_lost(&self) -> FetchError {
        tracing::debug!(location = %self.location, "Article load worker exited without a result");
        FetchError::new(FetchErrorKind::Other).with_location(self.location.clone())
    }
}

/// Start loading the dataset at `location` on a worker thread.
#[must_use]
pub fn spawn_load(source: Arc<dyn ArticleSource>, location: impl Into<String>) -> PendingLoad {
    let location = location.into();
    let (tx, rx) = mpsc::channel();

    let worker_location = location.clone();
    thread::spawn(move || {
        let result = load(source.as_ref(), &worker_location);
        // Receiver may be gone if the page was torn down.
        let _ = tx.send(result);
    });

    PendingLoad::new(rx, location)
}
