//! Counter page presentation
//!
//! [`CounterView`] is the terminal rendition of the counter page. It
//! subscribes to the store once when mounted, keeps the latest counter value
//! in a `watch` channel fed by that listener, and derives the doubled value
//! through a [`Memo`] so it is only recomputed when the counter changes.

use crate::app::{doubled, select_value, AppAction, AppState, AppStore};
use crate::command::Command;
use crate::CounterAction;
use slicekit_core::selector::Memo;
use slicekit_runtime::{EffectHandle, StoreError, Subscription};
use std::fmt::Write as _;
use tokio::sync::watch;

/// The four controls of the counter page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Subtract one
    Decrement,
    /// Add one
    Increment,
    /// Add the configured amount
    AddAmount,
    /// Back to zero
    Reset,
}

impl Button {
    /// Every button, in page order
    pub const ALL: [Self; 4] = [Self::Decrement, Self::Increment, Self::AddAmount, Self::Reset];

    /// Text shown on the button
    #[must_use]
    pub fn label(self, add_amount: i64) -> String {
        match self {
            Self::Decrement => "Decrement".to_string(),
            Self::Increment => "Increment".to_string(),
            Self::AddAmount => format!("Add {add_amount}"),
            Self::Reset => "Reset".to_string(),
        }
    }

    /// Action dispatched when the button is pressed
    #[must_use]
    pub const fn action(self, add_amount: i64) -> CounterAction {
        match self {
            Self::Decrement => CounterAction::Decrement,
            Self::Increment => CounterAction::Increment,
            Self::AddAmount => CounterAction::IncrementByAmount(add_amount),
            Self::Reset => CounterAction::Reset,
        }
    }
}

/// A mounted counter page
///
/// Holds one store subscription for its whole lifetime. The subscription is
/// released by [`CounterView::unmount`] or when the view is dropped.
#[derive(Debug)]
pub struct CounterView {
    store: AppStore,
    add_amount: i64,
    value: watch::Receiver<i64>,
    doubled: Memo<i64, i64>,
    subscription: Option<Subscription>,
}

impl CounterView {
    /// Mount the view on a store
    ///
    /// Subscribes first and then seeds the current value under the state
    /// read lock, so no action applied in between is missed.
    pub async fn mount(store: &AppStore, add_amount: i64) -> Self {
        let (sender, value) = watch::channel(0_i64);
        let sender = std::sync::Arc::new(sender);

        let listener_sender = std::sync::Arc::clone(&sender);
        let subscription = store.subscribe(move |state: &AppState| {
            listener_sender.send_replace(select_value(state));
        });

        store
            .state(|state| {
                sender.send_replace(select_value(state));
            })
            .await;

        tracing::debug!(listener = %subscription.id(), add_amount, "Counter view mounted");

        Self {
            store: store.clone(),
            add_amount,
            value,
            doubled: Memo::new(doubled),
            subscription: Some(subscription),
        }
    }

    /// Latest counter value seen by the view
    #[must_use]
    pub fn current(&self) -> i64 {
        *self.value.borrow()
    }

    /// Doubled counter value, recomputed only when the counter changed
    pub fn doubled(&mut self) -> i64 {
        let value = self.current();
        *self.doubled.get(&value)
    }

    /// How many times the doubled value has been computed
    #[must_use]
    pub const fn doubled_recomputations(&self) -> usize {
        self.doubled.recomputations()
    }

    /// Whether the counter changed since the last [`CounterView::render`]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.value.has_changed().unwrap_or(false)
    }

    /// Amount added by the "Add" button
    #[must_use]
    pub const fn add_amount(&self) -> i64 {
        self.add_amount
    }

    /// Render the value panel and the button row
    pub fn render(&mut self) -> String {
        let value = *self.value.borrow_and_update();
        let doubled = *self.doubled.get(&value);

        let mut out = String::new();
        let _ = writeln!(out, "Current value: {value}");
        let _ = writeln!(out, "Doubled:       {doubled}");
        let buttons = self
            .buttons()
            .into_iter()
            .map(|(_, label)| format!("[ {label} ]"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&buttons);
        out
    }

    /// The four buttons with their labels
    #[must_use]
    pub fn buttons(&self) -> Vec<(Button, String)> {
        Button::ALL
            .into_iter()
            .map(|button| (button, button.label(self.add_amount)))
            .collect()
    }

    /// Press a button
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    pub async fn press(&self, button: Button) -> Result<EffectHandle, StoreError> {
        tracing::debug!(?button, "Button pressed");
        self.send(button.action(self.add_amount)).await
    }

    /// Dispatch a counter action to the store
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    pub async fn send(&self, action: CounterAction) -> Result<EffectHandle, StoreError> {
        self.store.send(AppAction::Counter(action)).await
    }

    /// Run a terminal command
    ///
    /// Returns `None` for commands that do not touch the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    pub async fn dispatch(&self, command: Command) -> Result<Option<EffectHandle>, StoreError> {
        match command {
            Command::Press(button) => self.press(button).await.map(Some),
            Command::Add(amount) => self
                .send(CounterAction::IncrementByAmount(amount))
                .await
                .map(Some),
            Command::Help | Command::Quit => Ok(None),
        }
    }

    /// Release the store subscription
    ///
    /// The view keeps its last value but stops following the store.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!(listener = %subscription.id(), "Counter view unmounted");
            subscription.unsubscribe();
        }
    }

    /// Whether the view still follows the store
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }
}
