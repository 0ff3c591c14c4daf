//! Scoped acquisition and release of pipeline tasks.

use tokio::task::AbortHandle;

/// Handle to one running piece of pipeline plumbing (a render loop, an
/// intent binding, a driver task).
///
/// Dropping a `Subscription` does NOT cancel the work; cancellation is
/// explicit via [`Subscription::cancel`] or by adding the handle to a
/// [`SubscriptionSet`] that is later cleared.
pub struct Subscription {
    handle: AbortHandle,
}

impl Subscription {
    pub(crate) fn new(handle: AbortHandle) -> Self {
        Self { handle }
    }

    /// Cancel the underlying task.
    pub fn cancel(self) {
        self.handle.abort();
    }
}

/// Collection of subscriptions released together.
///
/// Everything added during one start cycle is cancelled by a single
/// [`SubscriptionSet::clear`], so handles cannot leak across stop/start
/// cycles. Dropping the set clears it.
#[derive(Default)]
pub struct SubscriptionSet {
    handles: Vec<AbortHandle>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a subscription; it will be cancelled on `clear`.
    pub fn add(&mut self, subscription: Subscription) {
        self.handles.push(subscription.handle);
    }

    /// Cancel and release every held subscription.
    pub fn clear(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.clear();
    }
}
