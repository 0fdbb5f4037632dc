//! # Counter Example
//!
//! A counter page wired to a SliceKit store.
//!
//! This example showcases:
//! - A pure slice reducer (no side effects)
//! - A root app state that embeds the slice
//! - A view that subscribes on mount, derives a memoized value, and
//!   releases its subscription on unmount
//!
//! ## Architecture
//!
//! ```text
//! CounterView ──press──▶ AppAction::Counter ──▶ Store ──▶ app_reducer ──▶ CounterReducer
//!      ▲                                          │
//!      └────────── listener (new AppState) ◀──────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use counter::app::{make_store, select_value, AppAction};
//! use counter::CounterAction;
//!
//! # async fn example() -> Result<(), slicekit_runtime::StoreError> {
//! let store = make_store();
//!
//! store.send(AppAction::Counter(CounterAction::Increment)).await?;
//! let value = store.state(select_value).await;
//! assert_eq!(value, 1);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use slicekit_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Root application state, actions and store construction
pub mod app;

/// Text commands typed into the terminal front end
pub mod command;

/// Environment-driven configuration for the binary
pub mod config;

/// The presentation layer
pub mod view;

/// Counter state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterState {
    /// Current value; any `i64`, including negatives
    pub value: i64,
}

/// Counter actions
///
/// Serialized the way the web front end names them, e.g.
/// `{"type":"counter/incrementByAmount","payload":5}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum CounterAction {
    /// Add one
    #[serde(rename = "counter/increment")]
    Increment,
    /// Subtract one
    #[serde(rename = "counter/decrement")]
    Decrement,
    /// Add an arbitrary (possibly negative) amount
    #[serde(rename = "counter/incrementByAmount")]
    IncrementByAmount(i64),
    /// Back to zero
    #[serde(rename = "counter/reset")]
    Reset,
}

/// Counter reducer
///
/// Arithmetic wraps at the `i64` bounds, so every transition is total and
/// `Decrement` always undoes `Increment`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.value = state.value.wrapping_add(1);
            },
            CounterAction::Decrement => {
                state.value = state.value.wrapping_sub(1);
            },
            CounterAction::IncrementByAmount(amount) => {
                state.value = state.value.wrapping_add(amount);
            },
            CounterAction::Reset => {
                state.value = 0;
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}
