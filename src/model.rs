//! View-model abstraction: the dispatch/reduce surface of a pipeline.

use std::sync::Arc;

use futures_core::stream::BoxStream;
use futures_util::stream::{self, StreamExt};

use crate::interceptor::PipelineInterceptor;
use crate::mvi::{RenderAction, ViewIntent, ViewState};

/// The abstract surface a concrete screen model implements.
///
/// A view-model maps each published intent to a stream of render actions
/// (`dispatcher`) and folds those actions into successive states
/// (`reducer`). The engine in [`crate::store::Store`] owns the plumbing:
/// queueing intents, merging concurrent action streams in arrival order,
/// serializing reduction, suppressing duplicate states, and multicasting
/// the result.
pub trait ViewModel: Send + Sync + 'static {
    type Intent: ViewIntent;
    type Action: RenderAction;
    type State: ViewState;

    /// Map an intent to zero-or-more render actions.
    ///
    /// The returned stream may run asynchronous work; its items are fed
    /// back into the shared pipeline as they arrive. There is no built-in
    /// retry or recovery path: implementations are expected to catch their
    /// own failures and convert them into an error-carrying action so the
    /// failure flows through the same reduce/emit path as success.
    fn dispatcher(&self, intent: Self::Intent) -> BoxStream<'static, Self::Action>;

    /// Fold the previous state and a render action into the next state.
    ///
    /// Must be pure: no side effects, total for every (state, action)
    /// pair. The engine serializes calls, so no two reductions run
    /// concurrently for one pipeline.
    fn reducer(&self, previous: Self::State, action: Self::Action) -> Self::State;

    /// Transform the intent stream before dispatch.
    ///
    /// Default is pass-through. Override to implement per-intent
    /// concurrency policies, e.g. dropping duplicate refresh intents while
    /// one is in flight.
    fn filter_intents(
        &self,
        intents: BoxStream<'static, Self::Intent>,
    ) -> BoxStream<'static, Self::Intent> {
        intents
    }

    /// Optional observer of the pipeline's three interception points.
    ///
    /// Default is `None`, which is a no-op. See
    /// [`PipelineInterceptor`].
    fn interceptor(
        &self,
    ) -> Option<Arc<dyn PipelineInterceptor<Self::Intent, Self::Action, Self::State>>> {
        None
    }
}

/// Action stream carrying exactly one already-available action.
pub fn one_action<A: RenderAction>(action: A) -> BoxStream<'static, A> {
    stream::iter([action]).boxed()
}

/// Empty action stream, for intents with no observable outcome.
pub fn no_actions<A: RenderAction>() -> BoxStream<'static, A> {
    stream::empty().boxed()
}
