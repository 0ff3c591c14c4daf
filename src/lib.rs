//! Unidirectional-data-flow (MVI) scaffolding.
//!
//! A screen is three pieces: a view-model turning a stream of user
//! intents into a stream of immutable view states, a renderer painting
//! states into a layout, and a host wiring the two together across
//! start/stop lifecycle cycles.
//!
//! ```text
//! intents ─→ dispatcher ─→ actions ─→ reducer ─→ states ─→ renderer
//! ```
//!
//! The [`Store`] runs the pipeline for one screen instance: intents are
//! queued, mapped to asynchronous render-action streams, merged in
//! arrival order, folded through the reducer one action at a time, and
//! exposed as a deduplicated, replay-1, multicast state stream that is
//! live from construction. The [`ScreenHost`] subscribes a renderer to
//! that stream for the duration of each start cycle.
//!
//! ```ignore
//! struct CounterModel;
//!
//! impl ViewModel for CounterModel {
//!     type Intent = CounterIntent;
//!     type Action = CounterAction;
//!     type State = CounterState;
//!
//!     fn dispatcher(&self, intent: CounterIntent) -> BoxStream<'static, CounterAction> {
//!         match intent {
//!             CounterIntent::Increment => one_action(CounterAction::Incremented),
//!         }
//!     }
//!
//!     fn reducer(&self, previous: CounterState, action: CounterAction) -> CounterState {
//!         match action {
//!             CounterAction::Incremented => CounterState { count: previous.count + 1 },
//!         }
//!     }
//! }
//!
//! let store = Store::new(CounterModel, CounterState { count: 0 });
//! store.publish(CounterIntent::Increment);
//! ```

pub mod error;
pub mod host;
pub mod interceptor;
pub mod model;
pub mod mvi;
pub mod render;
pub mod store;
pub mod subscription;

pub use error::HostError;
pub use host::{Screen, ScreenHost};
pub use interceptor::{PipelineInterceptor, TracingInterceptor};
pub use model::{no_actions, one_action, ViewModel};
pub use mvi::{RenderAction, ViewIntent, ViewLayout, ViewState};
pub use render::ViewRenderer;
pub use store::{IntentSink, StateStream, Store, StoreBuilder};
pub use subscription::{Subscription, SubscriptionSet};
