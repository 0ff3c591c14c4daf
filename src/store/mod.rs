//! Pipeline engine: one `Store` per screen instance.
//!
//! A store owns the running intent→state machinery for a single
//! view-model:
//!
//! ```text
//! publish ─→ intent queue ─→ filter ─→ dispatch ─┐ (merge, arrival order)
//!                                                ├─→ action queue
//!                                                ┘
//!                action queue ─→ reduce ─→ dedup ─→ latest cache ─→ subscribers
//! ```
//!
//! The pipeline is eagerly connected: the driver tasks start at
//! construction and run with zero subscribers. Dropping the store aborts
//! the drivers and ends every state subscription.

mod pipeline;
mod states;

pub use states::StateStream;

use std::sync::Arc;

use futures_core::stream::BoxStream;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::model::ViewModel;
use crate::mvi::ViewIntent;
use crate::subscription::{Subscription, SubscriptionSet};

use self::states::StateCell;

/// Configuration surface for a [`Store`].
pub struct StoreBuilder<M: ViewModel> {
    model: M,
    initial: M::State,
    label: String,
}

impl<M: ViewModel> StoreBuilder<M> {
    pub fn new(model: M, initial: M::State) -> Self {
        Self {
            model,
            initial,
            label: "uniflow".to_owned(),
        }
    }

    /// Label attached to log events from this pipeline.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Build the store and eagerly connect its pipeline.
    ///
    /// Must be called from within a tokio runtime; the driver tasks are
    /// spawned here.
    pub fn build(self) -> Store<M> {
        let model = Arc::new(self.model);
        let label: Arc<str> = self.label.into();
        let states = StateCell::new(self.initial);
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let intent_stream = UnboundedReceiverStream::new(intent_rx).boxed();
        let filtered = model.filter_intents(intent_stream);

        let mut driver = SubscriptionSet::new();
        let dispatch = tokio::spawn(pipeline::dispatch_loop(
            Arc::clone(&model),
            filtered,
            action_tx,
        ));
        driver.add(Subscription::new(dispatch.abort_handle()));
        let reduce = tokio::spawn(pipeline::reduce_loop(
            Arc::clone(&model),
            action_rx,
            states.clone(),
        ));
        driver.add(Subscription::new(reduce.abort_handle()));

        Store {
            model,
            intents: intent_tx,
            states,
            label,
            driver,
        }
    }
}

/// A running intent→state pipeline.
pub struct Store<M: ViewModel> {
    model: Arc<M>,
    intents: mpsc::UnboundedSender<M::Intent>,
    states: StateCell<M::State>,
    label: Arc<str>,
    driver: SubscriptionSet,
}

impl<M: ViewModel> Store<M> {
    /// Build a store with default configuration. See [`StoreBuilder`].
    pub fn new(model: M, initial: M::State) -> Self {
        StoreBuilder::new(model, initial).build()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Enqueue a user intent. Fire-and-forget, callable from any thread.
    ///
    /// An intent published after the pipeline has shut down is dropped
    /// and recorded with a warning.
    pub fn publish(&self, intent: M::Intent) {
        if self.intents.send(intent).is_err() {
            tracing::warn!(pipeline = %self.label, "intent dropped: pipeline is shut down");
        }
    }

    /// Clonable publish handle detached from the store's borrow.
    pub fn intent_sink(&self) -> IntentSink<M::Intent> {
        IntentSink {
            tx: self.intents.clone(),
            label: Arc::clone(&self.label),
        }
    }

    /// Subscribe to the state stream.
    ///
    /// The subscriber immediately receives the most recent state (the
    /// initial state if nothing has been emitted yet), then every
    /// subsequent distinct state. The stream ends when the store is
    /// dropped.
    pub fn states(&self) -> StateStream<M::State> {
        self.states.subscribe()
    }

    /// Snapshot of the most recent state.
    pub fn current_state(&self) -> M::State {
        self.states.current()
    }

    /// Bind an external intent-producing stream into the pipeline.
    ///
    /// Returns the binding's subscription so the caller can scope its
    /// release to a lifecycle; the binding also ends on its own when the
    /// source stream or the pipeline finishes.
    pub fn process_intents(&self, intents: BoxStream<'static, M::Intent>) -> Subscription {
        let tx = self.intents.clone();
        let task = tokio::spawn(async move {
            let mut intents = intents;
            while let Some(intent) = intents.next().await {
                if tx.send(intent).is_err() {
                    break;
                }
            }
        });
        Subscription::new(task.abort_handle())
    }
}

impl<M: ViewModel> Drop for Store<M> {
    fn drop(&mut self) {
        // End subscriptions first so `next()` resolves to None promptly;
        // the driver set then aborts both loops.
        self.states.close();
        self.driver.clear();
    }
}

/// Clonable fire-and-forget handle for publishing intents from any
/// thread, independent of the store's lifetime.
pub struct IntentSink<I: ViewIntent> {
    tx: mpsc::UnboundedSender<I>,
    label: Arc<str>,
}

impl<I: ViewIntent> Clone for IntentSink<I> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            label: Arc::clone(&self.label),
        }
    }
}

impl<I: ViewIntent> IntentSink<I> {
    pub fn publish(&self, intent: I) {
        if self.tx.send(intent).is_err() {
            tracing::warn!(pipeline = %self.label, "intent dropped: pipeline is shut down");
        }
    }
}
