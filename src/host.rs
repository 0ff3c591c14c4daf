//! Scoped session driving a screen across start/stop cycles.
//!
//! The host is the lifecycle side of the pattern: a UI framework calls
//! `attach`/`start`/`stop` at the matching points of its own lifecycle,
//! and the host acquires and releases the pipeline subscriptions so
//! nothing leaks across cycles.

use std::sync::Arc;

use futures_core::stream::BoxStream;
use parking_lot::Mutex;

use crate::error::HostError;
use crate::model::ViewModel;
use crate::mvi::ViewLayout;
use crate::render::ViewRenderer;
use crate::store::Store;
use crate::subscription::{Subscription, SubscriptionSet};

/// The surface a concrete screen supplies to its host.
pub trait Screen: Send + 'static {
    type Model: ViewModel;
    type Layout: ViewLayout;

    /// Dependency hook, invoked exactly once when the screen is attached.
    /// Obtain the store and any collaborators here.
    fn inject(&mut self);

    /// The intent source for one start cycle. Called once per `start`;
    /// the returned stream is consumed until `stop`.
    fn intents(&mut self) -> BoxStream<'static, <Self::Model as ViewModel>::Intent>;

    /// Shared handle to the UI surface the renderer paints into.
    fn layout(&self) -> Arc<Mutex<Self::Layout>>;

    /// The store driving this screen. Screens sharing a store observe the
    /// same state sequence.
    fn model(&self) -> Arc<Store<Self::Model>>;

    /// The renderer painting states into the layout.
    fn renderer(&self) -> Arc<dyn ViewRenderer<Self::Layout, <Self::Model as ViewModel>::State>>;
}

/// Lifecycle driver for one [`Screen`].
///
/// `start` acquires two subscriptions: a render task routing every emitted
/// state into `renderer.layout(..)`, and the binding of the screen's
/// intent source into the store. `stop` releases both. The store itself
/// outlives start/stop, so intents published while stopped are still
/// processed; the next `start` replays the latest state exactly once.
pub struct ScreenHost<S: Screen> {
    screen: S,
    subscriptions: SubscriptionSet,
    attached: bool,
    started: bool,
}

impl<S: Screen> ScreenHost<S> {
    pub fn new(screen: S) -> Self {
        Self {
            screen,
            subscriptions: SubscriptionSet::new(),
            attached: false,
            started: false,
        }
    }

    /// Run the screen's injection hook. Idempotent; only the first call
    /// injects.
    pub fn attach(&mut self) {
        if !self.attached {
            self.screen.inject();
            self.attached = true;
        }
    }

    /// Begin a start cycle: subscribe the renderer and bind the intent
    /// source.
    pub fn start(&mut self) -> Result<(), HostError> {
        if !self.attached {
            return Err(HostError::NotAttached);
        }
        if self.started {
            return Err(HostError::AlreadyStarted);
        }

        let store = self.screen.model();
        let layout = self.screen.layout();
        let renderer = self.screen.renderer();
        let mut states = store.states();
        let render_task = tokio::spawn(async move {
            while let Some(state) = states.next().await {
                let mut surface = layout.lock();
                renderer.layout(&mut surface, &state);
            }
        });
        self.subscriptions
            .add(Subscription::new(render_task.abort_handle()));

        let intents = self.screen.intents();
        self.subscriptions.add(store.process_intents(intents));

        self.started = true;
        Ok(())
    }

    /// End the current start cycle, releasing every subscription acquired
    /// by the matching `start`. Idempotent.
    pub fn stop(&mut self) {
        self.subscriptions.clear();
        self.started = false;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Tear the host down and recover the screen. Any active start cycle
    /// is stopped.
    pub fn into_screen(mut self) -> S {
        self.stop();
        self.screen
    }
}
