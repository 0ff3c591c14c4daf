//! Optional observation of a running pipeline.

use std::fmt::Debug;

/// Observer invoked synchronously at three points of the pipeline.
///
/// All hooks default to no-ops, so an implementation overrides only the
/// points it cares about. Hooks run on the pipeline's driver tasks and
/// must not block; they are for logging and test instrumentation, never
/// control flow. `on_state` fires before the duplicate-suppression gate,
/// so it also observes states that equality-dedup keeps from subscribers.
pub trait PipelineInterceptor<I, A, S>: Send + Sync {
    /// Called immediately before an intent is dispatched.
    fn on_intent(&self, _intent: &I) {}

    /// Called before a render action is reduced.
    fn on_action(&self, _action: &A) {}

    /// Called before a state is emitted.
    fn on_state(&self, _state: &S) {}
}

/// Interceptor that logs all three points through `tracing` at debug
/// level, tagged with a pipeline label.
pub struct TracingInterceptor {
    label: String,
}

impl TracingInterceptor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl<I, A, S> PipelineInterceptor<I, A, S> for TracingInterceptor
where
    I: Debug,
    A: Debug,
    S: Debug,
{
    fn on_intent(&self, intent: &I) {
        tracing::debug!(pipeline = %self.label, ?intent, "dispatching intent");
    }

    fn on_action(&self, action: &A) {
        tracing::debug!(pipeline = %self.label, ?action, "reducing render action");
    }

    fn on_state(&self, state: &S) {
        tracing::debug!(pipeline = %self.label, ?state, "view state produced");
    }
}
