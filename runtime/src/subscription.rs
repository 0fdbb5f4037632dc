//! State listeners and scoped subscriptions
//!
//! Views register a listener with [`Store::subscribe`](crate::Store::subscribe)
//! when they mount. The store calls every listener synchronously with the new
//! state after each action is reduced. The returned [`Subscription`] is a
//! guard: dropping it (or calling [`Subscription::unsubscribe`]) removes the
//! listener, so a view that is torn down can never be notified again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Boxed state listener
pub(crate) type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Identifier of a registered listener, unique per store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// The raw numeric id
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Ordered set of listeners shared by all clones of a store
pub(crate) struct ListenerRegistry<S> {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, Listener<S>)>>,
}

impl<S> ListenerRegistry<S> {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn register(&self, listener: Listener<S>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));
        id
    }

    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        before != listeners.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Call every listener in registration order, returning how many ran.
    ///
    /// The registry lock is released before any listener runs, so listeners
    /// may subscribe or unsubscribe from inside the callback. Such changes
    /// take effect from the next notification.
    pub(crate) fn notify(&self, state: &S) -> usize {
        let listeners: Vec<Listener<S>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in &listeners {
            listener(state);
        }

        listeners.len()
    }
}

/// Guard for a registered listener
///
/// The listener stays registered for as long as this value lives.
///
/// # Example
///
/// ```ignore
/// let subscription = store.subscribe(|state: &AppState| render(state));
/// // ... listener runs after every action ...
/// drop(subscription); // listener removed
/// ```
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    id: ListenerId,
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub(crate) fn new<S: 'static>(id: ListenerId, registry: &Arc<ListenerRegistry<S>>) -> Self {
        let registry: Weak<ListenerRegistry<S>> = Arc::downgrade(registry);
        Self {
            id,
            release: Some(Box::new(move || {
                // The store may already be gone, in which case there is nothing to remove.
                if let Some(registry) = registry.upgrade() {
                    registry.remove(id);
                }
            })),
        }
    }

    /// Id of the listener this subscription guards
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove the listener now
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(listener = %self.id, "Releasing subscription");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.release.is_some())
            .finish()
    }
}
