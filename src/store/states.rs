//! Last-value cache with observer-list multicast.
//!
//! The cell is the downstream end of the pipeline: every reduced state
//! lands here, duplicates are suppressed by equality, and distinct states
//! fan out to all current subscribers. New subscribers always receive the
//! cached latest state first.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::mvi::ViewState;

struct Shared<S> {
    latest: S,
    subscribers: Vec<mpsc::UnboundedSender<S>>,
    closed: bool,
}

pub(crate) struct StateCell<S> {
    inner: Arc<Mutex<Shared<S>>>,
}

impl<S> Clone for StateCell<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ViewState> StateCell<S> {
    pub(crate) fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Shared {
                latest: initial,
                subscribers: Vec::new(),
                closed: false,
            })),
        }
    }

    /// Emit a state unless it equals the latest one.
    ///
    /// Returns whether the state was distinct and delivered. Subscribers
    /// whose receiving side is gone are pruned here.
    pub(crate) fn publish(&self, next: S) -> bool {
        let mut inner = self.inner.lock();
        if inner.latest == next {
            return false;
        }
        inner
            .subscribers
            .retain(|tx| tx.send(next.clone()).is_ok());
        inner.latest = next;
        true
    }

    /// Register a subscriber, replaying the latest state to it first.
    ///
    /// A subscription taken after `close` still replays the final state,
    /// then ends.
    pub(crate) fn subscribe(&self) -> StateStream<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        let _ = tx.send(inner.latest.clone());
        if !inner.closed {
            inner.subscribers.push(tx);
        }
        StateStream { rx }
    }

    pub(crate) fn current(&self) -> S {
        self.inner.lock().latest.clone()
    }

    /// End every current subscription and refuse new ones.
    pub(crate) fn close(&self) {
        let mut inner = self.inner.lock();
        inner.closed = true;
        inner.subscribers.clear();
    }
}

/// One subscriber's view of the state sequence.
///
/// Yields the state that was current at subscription time, then every
/// subsequent distinct state, in emission order and without gaps. Returns
/// `None` once the owning store has been dropped.
pub struct StateStream<S> {
    rx: mpsc::UnboundedReceiver<S>,
}

impl<S: ViewState> StateStream<S> {
    pub async fn next(&mut self) -> Option<S> {
        self.rx.recv().await
    }
}
