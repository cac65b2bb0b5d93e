//! State Engine
//!
//! The single serialized intake loop that turns dispatched actions into a
//! multicast stream of view states:
//!
//! ```text
//!   dispatch ──► intake ──► debounce (search only) ──► reducer ──► bus ──► subscribers
//!                  ▲                                      │
//!                  └───────── result actions ◄── effects ─┘
//! ```
//!
//! # Design Philosophy
//!
//! - **One writer.** All actions fold through the reducer on a single task,
//!   so state transitions are totally ordered without locks on the state.
//! - **Search is debounced, nothing else is.** Keystrokes coalesce over a
//!   quiet period; every other action keeps its arrival order.
//! - **Effects cannot cascade.** Result actions come back on a dedicated
//!   channel and fold through the reducer, but are never handed to the
//!   orchestrator again.
//! - **Replay-1 multicast.** A late subscriber immediately receives the
//!   latest state, then every subsequent distinct state in order.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::catalog::Catalog;
use crate::clipboard::Clipboard;
use crate::config::EngineConfig;
use crate::effects::EffectRunner;
use crate::meta::AppMeta;
use crate::reducer::Reducer;
use crate::state::ViewState;

/// Dispatching or subscribing failed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine task has stopped and no longer accepts actions.
    #[error("engine is no longer running")]
    Closed,
}

/// Unique identifier for a state subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

struct BusInner {
    latest: ViewState,
    subscribers: HashMap<SubscriberId, mpsc::UnboundedSender<ViewState>>,
}

/// Replay-1 multicast bus for view states.
///
/// Subscribing delivers the latest state immediately, then every state
/// published afterwards, in publish order. Subscribers whose receiver was
/// dropped are pruned on the next publish.
#[derive(Clone)]
pub struct StateBus {
    inner: Arc<RwLock<BusInner>>,
}

impl StateBus {
    /// Create a bus whose replay slot holds `initial`.
    #[must_use]
    pub fn new(initial: ViewState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BusInner {
                latest: initial,
                subscribers: HashMap::new(),
            })),
        }
    }

    /// Register a subscriber; the latest state is already in its queue.
    pub fn subscribe(&self) -> (SubscriberId, mpsc::UnboundedReceiver<ViewState>) {
        let id = SubscriberId::next();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.write();
        // Replay happens under the lock so no publish can slip in between.
        if tx.send(inner.latest.clone()).is_ok() {
            inner.subscribers.insert(id, tx);
        }
        debug!(subscriber = id.0, "state subscriber registered");
        (id, rx)
    }

    /// Remove a subscriber explicitly.
    pub fn unsubscribe(&self, id: SubscriberId) {
        if self.inner.write().subscribers.remove(&id).is_some() {
            debug!(subscriber = id.0, "state subscriber removed");
        }
    }

    /// Publish a state to every live subscriber and the replay slot.
    pub fn publish(&self, state: ViewState) {
        let mut inner = self.inner.write();
        inner.latest = state.clone();
        inner
            .subscribers
            .retain(|_, tx| tx.send(state.clone()).is_ok());
    }

    /// The state a new subscriber would see first.
    #[must_use]
    pub fn latest(&self) -> ViewState {
        self.inner.read().latest.clone()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.read().subscribers.len()
    }
}

/// Running engine: dispatch actions in, subscribe to states out.
///
/// Dropping the handle stops the engine once in-flight work drains.
pub struct EngineHandle {
    actions: mpsc::UnboundedSender<Action>,
    bus: StateBus,
    task: JoinHandle<()>,
}

impl EngineHandle {
    /// Dispatch an action into the engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Closed`] when the engine task has stopped.
    pub fn dispatch(&self, action: Action) -> Result<(), EngineError> {
        self.actions.send(action).map_err(|_| EngineError::Closed)
    }

    /// Subscribe to the state stream; the latest state is delivered first.
    #[must_use]
    pub fn subscribe(&self) -> UnboundedReceiverStream<ViewState> {
        let (_, rx) = self.bus.subscribe();
        UnboundedReceiverStream::new(rx)
    }

    /// The latest published state.
    #[must_use]
    pub fn latest(&self) -> ViewState {
        self.bus.latest()
    }

    /// Stop accepting actions and wait for the engine task to drain.
    pub async fn shutdown(self) {
        drop(self.actions);
        if self.task.await.is_err() {
            warn!("engine task panicked during shutdown");
        }
    }
}

/// Assembles and runs the state engine.
pub struct Engine;

impl Engine {
    /// Start the engine on the current tokio runtime.
    ///
    /// The initial state is built from `catalog`, published to the bus, and
    /// the startup requests (version, stage icons) are dispatched before any
    /// external action is consumed.
    #[must_use]
    pub fn start(
        config: EngineConfig,
        catalog: Arc<Catalog>,
        meta: AppMeta,
        clipboard: Arc<dyn Clipboard>,
    ) -> EngineHandle {
        let initial = ViewState::initial(catalog);
        let bus = StateBus::new(initial.clone());

        let (actions_tx, actions_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        let runner = EngineRunner {
            reducer: Reducer::with_min_search_length(config.min_search_length),
            effects: EffectRunner::new(clipboard, meta, results_tx),
            bus: bus.clone(),
            state: initial,
            actions: actions_rx,
            results: results_rx,
            debounce: config.debounce,
        };

        info!(debounce_ms = config.debounce.as_millis() as u64, "engine starting");
        let task = tokio::spawn(runner.run());

        EngineHandle {
            actions: actions_tx,
            bus,
            task,
        }
    }
}

struct EngineRunner {
    reducer: Reducer,
    effects: EffectRunner,
    bus: StateBus,
    state: ViewState,
    actions: mpsc::UnboundedReceiver<Action>,
    results: mpsc::UnboundedReceiver<Action>,
    debounce: std::time::Duration,
}

impl EngineRunner {
    async fn run(mut self) {
        // Startup requests resolve before any external action is consumed.
        self.step(Action::AppVersionRequested);
        self.step(Action::StageIconsRequested);

        let timer = tokio::time::sleep(self.debounce);
        tokio::pin!(timer);
        let mut pending_search: Option<String> = None;
        let mut last_search: Option<String> = None;

        loop {
            tokio::select! {
                biased;

                result = self.results.recv() => {
                    if let Some(action) = result {
                        // Result actions fold but never re-enter the
                        // orchestrator, so effects cannot cascade.
                        self.fold(action);
                    }
                }

                () = &mut timer, if pending_search.is_some() => {
                    if let Some(text) = pending_search.take() {
                        if last_search.as_deref() != Some(text.as_str()) {
                            last_search = Some(text.clone());
                            self.step(Action::SearchChanged(text));
                        } else {
                            debug!("suppressing duplicate search emission");
                        }
                    }
                }

                action = self.actions.recv() => {
                    match action {
                        Some(Action::SearchChanged(text)) => {
                            pending_search = Some(text);
                            timer.as_mut().reset(tokio::time::Instant::now() + self.debounce);
                        }
                        Some(action) => {
                            if matches!(action, Action::SearchCleared) {
                                pending_search = None;
                                last_search = None;
                            }
                            self.step(action);
                        }
                        None => break,
                    }
                }
            }
        }

        // Drain: a search still under debounce applies, then any result
        // actions already queued fold in.
        if let Some(text) = pending_search.take() {
            if last_search.as_deref() != Some(text.as_str()) {
                self.step(Action::SearchChanged(text));
            }
        }
        while let Ok(action) = self.results.try_recv() {
            self.fold(action);
        }
        info!("engine stopped");
    }

    /// Fold an externally dispatched action and resolve its effect, if any.
    fn step(&mut self, action: Action) {
        self.effects.handle(&action);
        self.fold(action);
    }

    /// Fold an action through the reducer; publish only distinct successors.
    fn fold(&mut self, action: Action) {
        let next = self.reducer.apply(self.state.clone(), action);
        if next != self.state {
            self.state = next.clone();
            self.bus.publish(next);
        }
    }
}
