//! Recording listeners for store tests

use std::sync::{Arc, Mutex, PoisonError};

/// Captures values seen by a store listener
///
/// Clones share the same recording, so one clone can be moved into the
/// listener while the test keeps another for assertions.
///
/// # Example
///
/// ```ignore
/// let recorder = Recorder::new();
/// let _subscription = store.subscribe(recorder.listener_for(|s: &AppState| s.counter.value));
///
/// store.send(AppAction::Counter(CounterAction::Increment)).await?;
/// assert_eq!(recorder.values(), vec![1]);
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T> Recorder<T> {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record one value
    pub fn record(&self, value: T) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }

    /// Number of recorded values
    #[must_use]
    pub fn len(&self) -> usize {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Build a store listener that records `select(state)` on every notification
    pub fn listener_for<S, F>(&self, select: F) -> impl Fn(&S) + Send + Sync + 'static + use<S, F, T>
    where
        F: Fn(&S) -> T + Send + Sync + 'static,
        T: Send + 'static,
    {
        let recorder = self.clone();
        move |state: &S| recorder.record(select(state))
    }
}

impl<T: Clone> Recorder<T> {
    /// All recorded values, oldest first
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent value
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
