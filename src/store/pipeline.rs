//! Driver tasks for a running pipeline.

use std::sync::Arc;

use futures_core::stream::BoxStream;
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::model::ViewModel;
use crate::store::states::StateCell;

/// Dispatch stage: consumes the filtered intent stream and merges each
/// intent's action stream into the shared action queue as items arrive.
pub(crate) async fn dispatch_loop<M: ViewModel>(
    model: Arc<M>,
    mut intents: BoxStream<'static, M::Intent>,
    actions: mpsc::UnboundedSender<M::Action>,
) {
    while let Some(intent) = intents.next().await {
        if let Some(interceptor) = model.interceptor() {
            interceptor.on_intent(&intent);
        }
        let mut outcomes = model.dispatcher(intent);
        let actions = actions.clone();
        // Each action stream gets its own forwarder so slow async work
        // cannot stall later intents. Concurrent outcomes interleave in
        // arrival order. Forwarding stops once the reduce side is gone;
        // in-flight work is otherwise left to finish on its own.
        tokio::spawn(async move {
            while let Some(action) = outcomes.next().await {
                if actions.send(action).is_err() {
                    break;
                }
            }
        });
    }
}

/// Reduce stage: the single consumer of the action queue.
///
/// Folds actions into state one at a time in arrival order, then hands
/// each result to the cell for deduplication and multicast. The fold
/// accumulator advances even when the cell suppresses the emission.
pub(crate) async fn reduce_loop<M: ViewModel>(
    model: Arc<M>,
    mut actions: mpsc::UnboundedReceiver<M::Action>,
    states: StateCell<M::State>,
) {
    let mut state = states.current();
    while let Some(action) = actions.recv().await {
        if let Some(interceptor) = model.interceptor() {
            interceptor.on_action(&action);
        }
        let next = model.reducer(state, action);
        if let Some(interceptor) = model.interceptor() {
            interceptor.on_state(&next);
        }
        states.publish(next.clone());
        state = next;
    }
}
