//! # SliceKit Testing
//!
//! Testing utilities and helpers for SliceKit reducers and stores.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then tests for reducers, no runtime needed
//! - [`assertions`]: Effect assertion helpers
//! - [`Recorder`]: Captures what a store listener observed
//!
//! ## Example
//!
//! ```ignore
//! use slicekit_testing::{assertions, ReducerTest};
//!
//! #[test]
//! fn reset_returns_to_zero() {
//!     ReducerTest::new(CounterReducer::new())
//!         .with_env(())
//!         .given_state(CounterState { value: 42 })
//!         .when_action(CounterAction::Reset)
//!         .then_state(|state| assert_eq!(state.value, 0))
//!         .then_effects(assertions::assert_no_effects)
//!         .run();
//! }
//! ```


/// Recording listeners
pub mod listeners;

pub use listeners::Recorder;
pub use reducer_test::{assertions, ReducerTest};
