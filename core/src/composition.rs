//! Reducer composition utilities
//!
//! An application usually keeps one root state made of several slices, each
//! owned by its own reducer. [`scope_reducer`] lifts a slice reducer so it can
//! run against the root state and root action type:
//!
//! - the **lens** focuses the root state on the slice
//! - **`to_local`** picks the actions meant for the slice (others are ignored)
//! - **`from_local`** wraps the slice's effect actions back into root actions
//!
//! # Example
//!
//! ```
//! use slicekit_core::composition::scope_reducer;
//! use slicekit_core::{smallvec, Effect, Reducer, SmallVec};
//!
//! #[derive(Clone, Default)]
//! struct TodoState {
//!     items: Vec<String>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum TodoAction {
//!     Add(String),
//! }
//!
//! struct TodoReducer;
//!
//! impl Reducer for TodoReducer {
//!     type State = TodoState;
//!     type Action = TodoAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut TodoState,
//!         action: TodoAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<TodoAction>; 4]> {
//!         match action {
//!             TodoAction::Add(item) => state.items.push(item),
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! #[derive(Default)]
//! struct RootState {
//!     todos: TodoState,
//!     title: String,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum RootAction {
//!     Todos(TodoAction),
//!     Rename(String),
//! }
//!
//! let root = scope_reducer(
//!     TodoReducer,
//!     |root: &mut RootState| &mut root.todos,
//!     |action: RootAction| match action {
//!         RootAction::Todos(action) => Some(action),
//!         RootAction::Rename(_) => None,
//!     },
//!     RootAction::Todos,
//! );
//!
//! let mut state = RootState::default();
//! let _ = root.reduce(&mut state, RootAction::Todos(TodoAction::Add("milk".into())), &());
//! assert_eq!(state.todos.items, vec!["milk".to_string()]);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Scopes a reducer to operate on one slice of a larger state.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `A`: The parent action type
/// - `R`: The slice reducer
///
/// # Arguments
///
/// - `reducer`: The slice reducer
/// - `lens`: Focuses the parent state on the slice
/// - `to_local`: Extracts a slice action from a parent action, `None` if the
///   action is not addressed to this slice
/// - `from_local`: Embeds a slice action into the parent action type
#[must_use]
pub fn scope_reducer<S, A, R>(
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
    to_local: fn(A) -> Option<R::Action>,
    from_local: fn(R::Action) -> A,
) -> ScopedReducer<S, A, R>
where
    R: Reducer,
{
    ScopedReducer {
        reducer,
        lens,
        to_local,
        from_local,
    }
}

/// A reducer that runs a slice reducer against a parent state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, A, R>
where
    R: Reducer,
{
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
    to_local: fn(A) -> Option<R::Action>,
    from_local: fn(R::Action) -> A,
}

impl<S, A, R> ScopedReducer<S, A, R>
where
    R: Reducer,
{
    /// The wrapped slice reducer
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.reducer
    }
}

impl<S, A, R> Clone for ScopedReducer<S, A, R>
where
    R: Reducer + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            lens: self.lens,
            to_local: self.to_local,
            from_local: self.from_local,
        }
    }
}

impl<S, A, R> std::fmt::Debug for ScopedReducer<S, A, R>
where
    R: Reducer + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedReducer")
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

impl<S, A, R> Reducer for ScopedReducer<S, A, R>
where
    R: Reducer,
    R::Action: Send + 'static,
    A: Send + 'static,
{
    type State = S;
    type Action = A;
    type Environment = R::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(local) = (self.to_local)(action) else {
            return SmallVec::new();
        };

        let from_local = self.from_local;
        self.reducer
            .reduce((self.lens)(state), local, env)
            .into_iter()
            .map(|effect| effect.map(from_local))
            .collect()
    }
}
