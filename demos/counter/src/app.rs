//! The root application state
//!
//! The counter lives in the `counter` slice of [`AppState`], the way a page
//! reads `state.counter.value` from its store. Every store is built by
//! [`make_store`] and handed to whoever needs it; there is no process-wide
//! instance.

use crate::{CounterAction, CounterReducer, CounterState};
use serde::{Deserialize, Serialize};
use slicekit_core::composition::{scope_reducer, ScopedReducer};
use slicekit_runtime::{Store, StoreConfig};

/// Root state of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The counter slice
    pub counter: CounterState,
}

/// Root actions, one variant per slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppAction {
    /// An action for the counter slice
    Counter(CounterAction),
}

impl From<CounterAction> for AppAction {
    fn from(action: CounterAction) -> Self {
        Self::Counter(action)
    }
}

/// Root reducer type
pub type AppReducer = ScopedReducer<AppState, AppAction, CounterReducer>;

/// Store type for the whole application
pub type AppStore = Store<AppState, AppAction, (), AppReducer>;

/// Build the root reducer from the slice reducers
#[must_use]
pub fn app_reducer() -> AppReducer {
    scope_reducer(
        CounterReducer::new(),
        |state: &mut AppState| &mut state.counter,
        |action: AppAction| match action {
            AppAction::Counter(action) => Some(action),
        },
        AppAction::Counter,
    )
}

/// Create a fresh store with `counter.value = 0`
#[must_use]
pub fn make_store() -> AppStore {
    make_store_with_config(StoreConfig::default())
}

/// Create a fresh store with a custom runtime configuration
#[must_use]
pub fn make_store_with_config(config: StoreConfig) -> AppStore {
    Store::with_config(AppState::default(), app_reducer(), (), config)
}

/// Selector for the counter value
#[must_use]
pub const fn select_value(state: &AppState) -> i64 {
    state.counter.value
}

/// Derived display value: twice the counter, wrapping like the counter does
#[must_use]
#[allow(clippy::trivially_copy_pass_by_ref)] // Memo derivations take their input by reference
pub const fn doubled(value: &i64) -> i64 {
    value.wrapping_mul(2)
}
