//! # SliceKit Runtime
//!
//! Runtime implementation for SliceKit state containers.
//!
//! This crate provides the [`Store`]: the single owner of an application's
//! state. The presentation layer holds a handle to a store (never a global),
//! dispatches actions through it, and observes state through listeners.
//!
//! ## Core Components
//!
//! - **Store**: Serializes actions, runs the reducer, notifies listeners
//! - **Subscription**: Scoped guard for a registered state listener
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to the reducer
//!
//! ## Example
//!
//! ```ignore
//! use slicekit_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Re-render on every change
//! let subscription = store.subscribe(|state| render(state));
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use slicekit_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use tokio::sync::RwLock;

/// State listeners and scoped subscriptions
pub mod subscription;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Reducing an action never fails; these errors come from the store's
    /// lifecycle and from waiting on effects.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        ///
        /// Some effects were still running when the timeout elapsed.
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for effects to complete
        #[error("Timeout waiting for effects")]
        Timeout,
    }
}

pub use error::StoreError;
pub use subscription::{ListenerId, Subscription};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::watch;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use slicekit_runtime::StoreConfig;
/// use std::time::Duration;
///
/// let config = StoreConfig::default()
///     .with_broadcast_capacity(256)
///     .with_shutdown_poll_interval(Duration::from_millis(5));
///
/// assert_eq!(config.broadcast_capacity, 256);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of actions buffered for each `subscribe_actions` receiver
    pub broadcast_capacity: usize,
    /// How often `shutdown` re-checks for in-flight effects
    pub shutdown_poll_interval: Duration,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(broadcast_capacity: usize, shutdown_poll_interval: Duration) -> Self {
        Self {
            broadcast_capacity,
            shutdown_poll_interval,
        }
    }

    /// Set the action broadcast capacity
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Set the shutdown poll interval
    #[must_use]
    pub const fn with_shutdown_poll_interval(mut self, interval: Duration) -> Self {
        self.shutdown_poll_interval = interval;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 16,
            shutdown_poll_interval: Duration::from_millis(10),
        }
    }
}

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`] to allow waiting for the effects started by
/// that action. Actions fed back by those effects are reduced before the
/// effect counts as complete.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(Action::Start).await?;
/// handle.wait_with_timeout(Duration::from_secs(5)).await?;
/// // All effects from Action::Start are now complete
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    /// Create a handle plus the tracking side used during effect execution
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };
        let tracking = EffectTracking {
            counter,
            notifier: Arc::new(tx),
        };

        (handle, tracking)
    }

    /// A handle with nothing to wait for
    #[must_use]
    pub fn completed() -> Self {
        let (handle, _tracking) = Self::new();
        handle
    }

    /// Whether every tracked effect has finished
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.effects.load(Ordering::SeqCst) == 0
    }

    /// Wait until every tracked effect has finished
    pub async fn wait(&mut self) {
        loop {
            if self.is_complete() {
                return;
            }
            // All tracking dropped: every effect guard has already run
            if self.completion.changed().await.is_err() {
                return;
            }
        }
    }

    /// Wait for effects with an upper bound
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if effects are still running when the timeout expires.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending", &self.effects.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Execution-side counterpart of [`EffectHandle`]
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: Arc<watch::Sender<()>>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.notifier.send_replace(());
        }
    }
}

/// Decrements the tracking counter on drop, including when an effect panics
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Decrements the store-wide pending effect counter on drop
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::subscription::{ListenerRegistry, Subscription};
    use super::{
        Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, DecrementGuard, Duration, Effect,
        EffectHandle, EffectTracking, Ordering, Reducer, RwLock, StoreConfig, StoreError,
    };
    use tokio::sync::broadcast;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; one writer at a time)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Listeners (notified synchronously after every action)
    /// 5. Effect execution (with feedback loop)
    ///
    /// A store is an ordinary value. Create one per application or session and
    /// pass it (or a clone, which shares the same state) to whatever needs it.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        listeners: Arc<ListenerRegistry<S>>,
        shutdown: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        config: StoreConfig,
        /// Every applied action, in application order
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default()`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let config = StoreConfig::default().with_broadcast_capacity(256);
        /// let store = Store::with_config(MyState::default(), MyReducer, env, config);
        /// ```
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                listeners: Arc::new(ListenerRegistry::new()),
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                config,
                action_broadcast,
            }
        }

        /// Register a listener called with the new state after every action
        ///
        /// Listeners run synchronously, in registration order, while the store
        /// holds a read lock on the fully-applied state: the next action cannot
        /// be reduced until every listener has returned. Keep them cheap and
        /// never block on the store from inside one.
        ///
        /// A listener registered during a notification is first called for the
        /// next action.
        ///
        /// # Returns
        ///
        /// A [`Subscription`] guard; the listener is removed when it is dropped.
        pub fn subscribe<F>(&self, listener: F) -> Subscription
        where
            F: Fn(&S) + Send + Sync + 'static,
        {
            let id = self.listeners.register(Arc::new(listener));
            tracing::debug!(listener = %id, "Listener subscribed");
            Subscription::new(id, &self.listeners)
        }

        /// Number of currently registered listeners
        #[must_use]
        pub fn listener_count(&self) -> usize {
            self.listeners.len()
        }

        /// Subscribe to every action applied by this store
        ///
        /// Includes actions sent by callers and actions fed back by effects, in
        /// the order they were reduced. A slow receiver skips old actions and
        /// gets `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Whether `shutdown` has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }

        /// Initiate graceful shutdown of the store
        ///
        /// This method:
        /// 1. Sets the shutdown flag (rejecting new actions)
        /// 2. Waits for pending effects to complete (with timeout)
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before all
        /// pending effects complete.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating graceful shutdown");
            metrics::counter!("store.shutdown.initiated").increment(1);

            self.shutdown.store(true, Ordering::Release);

            let start = std::time::Instant::now();

            loop {
                let pending = self.pending_effects.load(Ordering::Acquire);

                if pending == 0 {
                    tracing::info!("All effects completed, shutdown successful");
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(
                        pending_effects = pending,
                        "Shutdown timeout: {} effects still running", pending
                    );
                    metrics::counter!("store.shutdown.timeout").increment(1);
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tracing::debug!(
                    pending_effects = pending,
                    elapsed_ms = start.elapsed().as_millis(),
                    "Waiting for effects to complete"
                );

                tokio::time::sleep(self.config.shutdown_poll_interval).await;
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Downgrades to a read lock and notifies every listener
        /// 4. Broadcasts the action to `subscribe_actions` receivers
        /// 5. Starts the returned effects
        ///
        /// Concurrent `send()` calls serialize at step 1, so transitions never
        /// interleave and listeners only ever observe fully-applied state.
        ///
        /// # Returns
        ///
        /// An [`EffectHandle`] that can be used to wait for effect completion.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        ///
        /// # Panics
        ///
        /// A panicking reducer or listener propagates to the caller.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError>
        where
            R: Clone,
            E: Clone,
        {
            self.send_internal(action).await
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let value = store.state(|s| s.counter.value).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Clone the whole current state
        pub async fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state(S::clone).await
        }

        async fn send_internal(&self, action: A) -> Result<EffectHandle, StoreError>
        where
            R: Clone,
            E: Clone,
        {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let (handle, tracking) = EffectHandle::new();
            let observed = (self.action_broadcast.receiver_count() > 0).then(|| action.clone());

            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                let effects = {
                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();

                    let start = std::time::Instant::now();
                    let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                    metrics::histogram!("store.reducer.duration_seconds")
                        .record(start.elapsed().as_secs_f64());

                    tracing::trace!("Reducer completed, returned {} effects", effects.len());
                    effects
                };

                // Readers and listeners see the new state; writers wait until we are done
                let state = state.downgrade();
                let notified = self.listeners.notify(&*state);
                metrics::counter!("store.listeners.notified").increment(notified as u64);
                tracing::trace!(listeners = notified, "Listeners notified");

                if let Some(action) = observed {
                    // No receivers left is not an error
                    let _ = self.action_broadcast.send(action);
                }

                effects
            };

            for effect in effects {
                self.execute_effect_internal(effect, tracking.clone());
            }
            tracing::debug!("Action processing completed, returning handle");

            Ok(handle)
        }

        /// Execute an effect with tracking
        ///
        /// - `None`: No-op
        /// - `Future`: Executes async computation, sends resulting action if `Some`
        /// - `Delay`: Waits for duration, then sends action
        /// - `Parallel`: Executes effects concurrently
        /// - `Sequential`: Executes effects in order, waiting for each to complete
        ///
        /// Effect tasks that panic are isolated in their spawned task; the
        /// guards still release their counters.
        #[allow(clippy::needless_pass_by_value)] // tracking is cloned into tasks
        fn execute_effect_internal(&self, effect: Effect<A>, tracking: EffectTracking)
        where
            R: Clone,
            E: Clone,
        {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    let (guard, pending_guard) = self.track(&tracking);
                    let store = self.clone();
                    tokio::spawn(async move {
                        let _guard = guard;
                        let _pending_guard = pending_guard;
                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            if let Err(error) = store.send(action).await {
                                tracing::warn!(%error, "Dropped action produced by effect");
                            }
                        }
                    });
                },
                Effect::Delay { duration, action } => {
                    tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                    metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                    let (guard, pending_guard) = self.track(&tracking);
                    let store = self.clone();
                    tokio::spawn(async move {
                        let _guard = guard;
                        let _pending_guard = pending_guard;
                        tokio::time::sleep(duration).await;
                        if let Err(error) = store.send(*action).await {
                            tracing::warn!(%error, "Dropped delayed action");
                        }
                    });
                },
                Effect::Parallel(effects) => {
                    tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                    for effect in effects {
                        self.execute_effect_internal(effect, tracking.clone());
                    }
                },
                Effect::Sequential(effects) => {
                    let effect_count = effects.len();
                    tracing::trace!("Executing Effect::Sequential with {} effects", effect_count);
                    let (guard, pending_guard) = self.track(&tracking);
                    let store = self.clone();
                    tokio::spawn(async move {
                        let _guard = guard;
                        let _pending_guard = pending_guard;
                        for (idx, effect) in effects.into_iter().enumerate() {
                            tracing::trace!(
                                "Executing sequential effect {} of {}",
                                idx + 1,
                                effect_count
                            );
                            let (mut step, step_tracking) = EffectHandle::new();
                            store.execute_effect_internal(effect, step_tracking);
                            step.wait().await;
                        }
                    });
                },
            }
        }

        /// Count one in-flight effect against both the handle and the store
        fn track(&self, tracking: &EffectTracking) -> (DecrementGuard, AtomicCounterGuard) {
            tracking.increment();
            self.pending_effects.fetch_add(1, Ordering::SeqCst);
            (
                DecrementGuard(tracking.clone()),
                AtomicCounterGuard(Arc::clone(&self.pending_effects)),
            )
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                listeners: Arc::clone(&self.listeners),
                shutdown: Arc::clone(&self.shutdown),
                pending_effects: Arc::clone(&self.pending_effects),
                config: self.config.clone(),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("listeners", &self.listeners.len())
                .field("pending_effects", &self.pending_effects.load(Ordering::SeqCst))
                .field("shutting_down", &self.shutdown.load(Ordering::Acquire))
                .finish_non_exhaustive()
        }
    }
}

pub use store::Store;

#[cfg(test)]
mod tests {
    use super::*;
    use slicekit_core::{smallvec, SmallVec};
    use std::sync::{Mutex, PoisonError};

    #[derive(Debug, Clone)]
    struct TestState {
        value: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
        ProduceEffect,
        ProduceDelayedAction,
        ProduceSlowDelay,
        ProduceParallelEffects,
        ProduceSequentialEffects,
        ProducePanickingEffect,
    }

    #[derive(Debug, Clone)]
    struct TestEnv;

    #[derive(Debug, Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        #[allow(clippy::panic)] // Intentional panic for testing isolation
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.value += 1;
                    smallvec![Effect::None]
                },
                TestAction::Decrement => {
                    state.value -= 1;
                    smallvec![Effect::None]
                },
                TestAction::NoOp => smallvec![Effect::None],
                TestAction::ProduceEffect => {
                    smallvec![Effect::Future(Box::pin(async { Some(TestAction::Increment) }))]
                },
                TestAction::ProduceDelayedAction => smallvec![Effect::Delay {
                    duration: Duration::from_millis(10),
                    action: Box::new(TestAction::Increment),
                }],
                TestAction::ProduceSlowDelay => smallvec![Effect::Delay {
                    duration: Duration::from_secs(5),
                    action: Box::new(TestAction::Increment),
                }],
                TestAction::ProduceParallelEffects => smallvec![Effect::merge(vec![
                    Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                    Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                    Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                ])],
                TestAction::ProduceSequentialEffects => smallvec![Effect::chain(vec![
                    Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                    Effect::Future(Box::pin(async { Some(TestAction::Increment) })),
                    Effect::Future(Box::pin(async { Some(TestAction::Decrement) })),
                ])],
                TestAction::ProducePanickingEffect => {
                    smallvec![Effect::Future(Box::pin(async {
                        panic!("Intentional panic in effect for testing");
                    }))]
                },
            }
        }
    }

    fn store() -> Store<TestState, TestAction, TestEnv, TestReducer> {
        Store::new(TestState { value: 0 }, TestReducer, TestEnv)
    }

    #[tokio::test]
    async fn test_store_creation() {
        let store = store();
        assert_eq!(store.state(|s| s.value).await, 0);
        assert_eq!(store.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_multiple_actions() -> Result<(), StoreError> {
        let store = store();

        store.send(TestAction::Increment).await?;
        store.send(TestAction::Increment).await?;
        store.send(TestAction::Decrement).await?;

        assert_eq!(store.state(|s| s.value).await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_pure_action_handle_is_complete() -> Result<(), StoreError> {
        let store = store();
        let handle = store.send(TestAction::NoOp).await?;
        assert!(handle.is_complete());
        Ok(())
    }

    #[tokio::test]
    async fn test_effect_future() -> Result<(), StoreError> {
        let store = store();

        let mut handle = store.send(TestAction::ProduceEffect).await?;
        handle.wait_with_timeout(Duration::from_secs(1)).await?;

        assert_eq!(store.state(|s| s.value).await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_effect_delay() -> Result<(), StoreError> {
        let store = store();

        let mut handle = store.send(TestAction::ProduceDelayedAction).await?;
        assert_eq!(store.state(|s| s.value).await, 0);

        handle.wait_with_timeout(Duration::from_secs(1)).await?;
        assert_eq!(store.state(|s| s.value).await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_effect_parallel() -> Result<(), StoreError> {
        let store = store();

        let mut handle = store.send(TestAction::ProduceParallelEffects).await?;
        handle.wait_with_timeout(Duration::from_secs(1)).await?;

        assert_eq!(store.state(|s| s.value).await, 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_effect_sequential_order() -> Result<(), StoreError> {
        let store = store();
        let mut actions = store.subscribe_actions();

        let mut handle = store.send(TestAction::ProduceSequentialEffects).await?;
        handle.wait_with_timeout(Duration::from_secs(1)).await?;

        // Net result: +1 +1 -1 = 1
        assert_eq!(store.state(|s| s.value).await, 1);

        let mut seen = Vec::new();
        while let Ok(action) = actions.try_recv() {
            seen.push(action);
        }
        assert_eq!(
            seen,
            vec![
                TestAction::ProduceSequentialEffects,
                TestAction::Increment,
                TestAction::Increment,
                TestAction::Decrement,
            ]
        );
        Ok(())
    }

    #[tokio::test]
    #[allow(clippy::panic)] // Tests are allowed to panic on failures
    async fn test_concurrent_sends() {
        let store = store();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    let _ = store.send(TestAction::Increment).await;
                })
            })
            .collect();

        for handle in handles {
            if let Err(e) = handle.await {
                panic!("concurrent send task panicked: {e}");
            }
        }

        assert_eq!(store.state(|s| s.value).await, 10);
    }

    #[tokio::test]
    async fn test_store_clone_shares_state_and_listeners() -> Result<(), StoreError> {
        let store1 = store();
        let store2 = store1.clone();

        let _subscription = store1.subscribe(|_| {});
        assert_eq!(store2.listener_count(), 1);

        store1.send(TestAction::Increment).await?;
        assert_eq!(store2.state(|s| s.value).await, 1);

        store2.send(TestAction::Increment).await?;
        assert_eq!(store1.state(|s| s.value).await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_listener_sees_every_applied_state() -> Result<(), StoreError> {
        let store = store();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let subscription = {
            let seen = Arc::clone(&seen);
            store.subscribe(move |state: &TestState| {
                seen.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(state.value);
            })
        };

        store.send(TestAction::Increment).await?;
        store.send(TestAction::Increment).await?;
        store.send(TestAction::Decrement).await?;

        drop(subscription);
        store.send(TestAction::Increment).await?;

        let seen = seen.lock().unwrap_or_else(PoisonError::into_inner).clone();
        assert_eq!(seen, vec![1, 2, 1]);
        assert_eq!(store.listener_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_listeners_observe_effect_feedback() -> Result<(), StoreError> {
        let store = store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let _subscription = {
            let seen = Arc::clone(&seen);
            store.subscribe(move |state: &TestState| {
                seen.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(state.value);
            })
        };

        let mut handle = store.send(TestAction::ProduceEffect).await?;
        handle.wait_with_timeout(Duration::from_secs(1)).await?;

        let seen = seen.lock().unwrap_or_else(PoisonError::into_inner).clone();
        assert_eq!(seen, vec![0, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn test_effect_panic_isolation() -> Result<(), StoreError> {
        let store = store();

        let mut handle = store.send(TestAction::ProducePanickingEffect).await?;
        handle.wait_with_timeout(Duration::from_secs(1)).await?;

        // Store still works after the effect task panicked
        store.send(TestAction::Increment).await?;
        assert_eq!(store.state(|s| s.value).await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_shutdown_rejects_new_actions() -> Result<(), StoreError> {
        let store = store();

        store.shutdown(Duration::from_millis(100)).await?;
        assert!(store.is_shutting_down());

        let result = store.send(TestAction::Increment).await;
        assert_eq!(result.err(), Some(StoreError::ShutdownInProgress));
        assert_eq!(store.state(|s| s.value).await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_shutdown_times_out_on_slow_effects() -> Result<(), StoreError> {
        let store = store();

        let handle = store.send(TestAction::ProduceSlowDelay).await?;
        assert!(!handle.is_complete());

        let result = store.shutdown(Duration::from_millis(30)).await;
        assert_eq!(result, Err(StoreError::ShutdownTimeout(1)));
        Ok(())
    }

    #[tokio::test]
    async fn test_wait_with_timeout_expires() -> Result<(), StoreError> {
        let store = store();

        let mut handle = store.send(TestAction::ProduceSlowDelay).await?;
        let result = handle.wait_with_timeout(Duration::from_millis(20)).await;
        assert_eq!(result, Err(StoreError::Timeout));
        Ok(())
    }

    #[tokio::test]
    async fn test_completed_handle() {
        let mut handle = EffectHandle::completed();
        assert!(handle.is_complete());
        handle.wait().await;
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::default()
            .with_broadcast_capacity(0)
            .with_shutdown_poll_interval(Duration::from_millis(1));

        assert_eq!(config.broadcast_capacity, 1);
        assert_eq!(config.shutdown_poll_interval, Duration::from_millis(1));
    }
}
