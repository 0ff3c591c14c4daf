//! Shared fixtures: a counter screen exercised by the pipeline and host
//! tests.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use futures_core::stream::BoxStream;
use futures_util::stream::{self, StreamExt};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use uniflow::{
    no_actions, one_action, PipelineInterceptor, RenderAction, Screen, Store, ViewIntent,
    ViewLayout, ViewModel, ViewRenderer, ViewState,
};

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    /// Asynchronous addition completing after `delay`.
    AddLater { amount: i64, delay: Duration },
    Set(i64),
    /// Dispatches one `Added` action per amount, in order.
    BulkAdd(Vec<i64>),
    LoadFailed,
    Noop,
}

impl ViewIntent for CounterIntent {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Incremented,
    Added(i64),
    Replaced(i64),
    Error(String),
}

impl RenderAction for CounterAction {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
    pub error: Option<String>,
}

impl ViewState for CounterState {}

impl CounterState {
    pub fn with_count(count: i64) -> Self {
        Self { count, error: None }
    }
}

/// Records everything the pipeline shows it, for interception assertions.
#[derive(Default)]
pub struct RecordingInterceptor {
    pub intents: Mutex<Vec<CounterIntent>>,
    pub actions: Mutex<Vec<CounterAction>>,
    pub states: Mutex<Vec<CounterState>>,
}

impl PipelineInterceptor<CounterIntent, CounterAction, CounterState> for RecordingInterceptor {
    fn on_intent(&self, intent: &CounterIntent) {
        self.intents.lock().push(intent.clone());
    }

    fn on_action(&self, action: &CounterAction) {
        self.actions.lock().push(action.clone());
    }

    fn on_state(&self, state: &CounterState) {
        self.states.lock().push(state.clone());
    }
}

pub struct CounterModel {
    interceptor: Option<Arc<RecordingInterceptor>>,
}

impl CounterModel {
    pub fn new() -> Self {
        Self { interceptor: None }
    }

    pub fn with_interceptor(interceptor: Arc<RecordingInterceptor>) -> Self {
        Self {
            interceptor: Some(interceptor),
        }
    }
}

impl ViewModel for CounterModel {
    type Intent = CounterIntent;
    type Action = CounterAction;
    type State = CounterState;

    fn dispatcher(&self, intent: CounterIntent) -> BoxStream<'static, CounterAction> {
        match intent {
            CounterIntent::Increment => one_action(CounterAction::Incremented),
            CounterIntent::AddLater { amount, delay } => stream::once(async move {
                tokio::time::sleep(delay).await;
                CounterAction::Added(amount)
            })
            .boxed(),
            CounterIntent::Set(count) => one_action(CounterAction::Replaced(count)),
            CounterIntent::BulkAdd(amounts) => {
                stream::iter(amounts.into_iter().map(CounterAction::Added)).boxed()
            }
            CounterIntent::LoadFailed => one_action(CounterAction::Error("x".to_owned())),
            CounterIntent::Noop => no_actions(),
        }
    }

    fn reducer(&self, previous: CounterState, action: CounterAction) -> CounterState {
        match action {
            CounterAction::Incremented => CounterState {
                count: previous.count + 1,
                ..previous
            },
            CounterAction::Added(amount) => CounterState {
                count: previous.count + amount,
                ..previous
            },
            CounterAction::Replaced(count) => CounterState { count, ..previous },
            CounterAction::Error(message) => CounterState {
                error: Some(message),
                ..previous
            },
        }
    }

    fn interceptor(
        &self,
    ) -> Option<Arc<dyn PipelineInterceptor<CounterIntent, CounterAction, CounterState>>> {
        self.interceptor
            .clone()
            .map(|interceptor| interceptor as Arc<dyn PipelineInterceptor<_, _, _>>)
    }
}

/// Surface the renderer paints into: an append-only log of painted
/// states.
#[derive(Default)]
pub struct PaintLog {
    pub painted: Vec<CounterState>,
}

impl ViewLayout for PaintLog {}

pub struct LogRenderer;

impl ViewRenderer<PaintLog, CounterState> for LogRenderer {
    fn layout(&self, layout: &mut PaintLog, state: &CounterState) {
        layout.painted.push(state.clone());
    }
}

/// Screen whose intent source is a channel the test drives directly.
pub struct CounterScreen {
    store: Arc<Store<CounterModel>>,
    layout: Arc<Mutex<PaintLog>>,
    intent_tx: Arc<Mutex<Option<mpsc::UnboundedSender<CounterIntent>>>>,
    pub injected: u32,
}

impl CounterScreen {
    pub fn new(store: Arc<Store<CounterModel>>) -> Self {
        Self {
            store,
            layout: Arc::new(Mutex::new(PaintLog::default())),
            intent_tx: Arc::new(Mutex::new(None)),
            injected: 0,
        }
    }

    /// Handle the test uses to feed "UI" intents into the current start
    /// cycle's source.
    pub fn source(&self) -> Arc<Mutex<Option<mpsc::UnboundedSender<CounterIntent>>>> {
        Arc::clone(&self.intent_tx)
    }

    pub fn paint_log(&self) -> Arc<Mutex<PaintLog>> {
        Arc::clone(&self.layout)
    }
}

impl Screen for CounterScreen {
    type Model = CounterModel;
    type Layout = PaintLog;

    fn inject(&mut self) {
        self.injected += 1;
    }

    fn intents(&mut self) -> BoxStream<'static, CounterIntent> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.intent_tx.lock() = Some(tx);
        UnboundedReceiverStream::new(rx).boxed()
    }

    fn layout(&self) -> Arc<Mutex<PaintLog>> {
        Arc::clone(&self.layout)
    }

    fn model(&self) -> Arc<Store<CounterModel>> {
        Arc::clone(&self.store)
    }

    fn renderer(&self) -> Arc<dyn ViewRenderer<PaintLog, CounterState>> {
        Arc::new(LogRenderer)
    }
}

/// Poll `condition` until it holds or the deadline passes.
pub async fn eventually(condition: impl Fn() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
