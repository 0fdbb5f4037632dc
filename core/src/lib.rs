//! # SliceKit Core
//!
//! Core traits and types for SliceKit state containers.
//!
//! A SliceKit application keeps its state in one explicitly owned store and
//! changes it only by dispatching actions through a reducer.
//!
//! ## Core Concepts
//!
//! - **State**: Plain owned data for a feature (a "slice") or a whole app
//! - **Action**: A named transition request, optionally carrying parameters
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies
//! - **Selector**: Memoized derivation of display values from state
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: view → action → reducer → state → view
//! - No global singletons: stores are created and owned by the application
//! - Derive, don't store: display values are computed from state on demand
//!
//! ## Example
//!
//! ```
//! use slicekit_core::{smallvec, Effect, Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct LightState {
//!     on: bool,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum LightAction {
//!     Toggle,
//! }
//!
//! struct LightReducer;
//!
//! impl Reducer for LightReducer {
//!     type State = LightState;
//!     type Action = LightAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut LightState,
//!         action: LightAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<LightAction>; 4]> {
//!         match action {
//!             LightAction::Toggle => state.on = !state.on,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = LightState::default();
//! let _ = LightReducer.reduce(&mut state, LightAction::Toggle, &());
//! assert!(state.on);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer composition utilities (slices of a parent state)
pub mod composition;

/// Memoized selectors for derived values
pub mod selector;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for CounterReducer {
    ///     type State = CounterState;
    ///     type Action = CounterAction;
    ///     type Environment = ();
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut CounterState,
    ///         action: CounterAction,
    ///         _env: &(),
    ///     ) -> SmallVec<[Effect<CounterAction>; 4]> {
    ///         match action {
    ///             CounterAction::Increment => state.value = state.value.wrapping_add(1),
    ///             // ...
    ///         }
    ///         smallvec![Effect::None]
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    ///
    /// Pure state machines (like a counter) only ever return `Effect::None`.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (for timeouts, debouncing)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Whether this effect does nothing when executed
        ///
        /// Empty `Parallel`/`Sequential` groups and groups made only of no-ops count as no-ops.
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Parallel(effects) | Effect::Sequential(effects) => {
                    effects.iter().all(Effect::is_none)
                },
                Effect::Delay { .. } | Effect::Future(_) => false,
            }
        }

        /// Transform the actions this effect will produce
        ///
        /// Used to lift the effects of a child reducer into the action type of
        /// its parent (see [`crate::composition::scope_reducer`]).
        #[must_use]
        pub fn map<B, F>(self, f: F) -> Effect<B>
        where
            Action: Send + 'static,
            B: Send + 'static,
            F: Fn(Action) -> B + Clone + Send + Sync + 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Parallel(effects) => {
                    Effect::Parallel(effects.into_iter().map(|e| e.map(f.clone())).collect())
                },
                Effect::Sequential(effects) => {
                    Effect::Sequential(effects.into_iter().map(|e| e.map(f.clone())).collect())
                },
                Effect::Delay { duration, action } => Effect::Delay {
                    duration,
                    action: Box::new(f(*action)),
                },
                Effect::Future(fut) => Effect::Future(Box::pin(async move { fut.await.map(f) })),
            }
        }
    }
}

// Re-export the everyday names at the crate root
pub use effect::Effect;
pub use reducer::Reducer;
