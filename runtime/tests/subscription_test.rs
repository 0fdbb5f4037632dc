//! Integration tests for Store listeners and action observation
//!
//! These tests check what the presentation side can rely on: every listener
//! sees every fully-applied state, in order, exactly once.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use slicekit_core::{smallvec, Effect, Reducer, SmallVec};
use slicekit_runtime::{Store, StoreConfig, StoreError};
use slicekit_testing::Recorder;
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, Default)]
struct TallyState {
    total: i64,
    steps: u32,
}

#[derive(Debug, Clone, PartialEq)]
enum TallyAction {
    Add(i64),
    Clear,
}

#[derive(Clone)]
struct TallyReducer;

impl Reducer for TallyReducer {
    type State = TallyState;
    type Action = TallyAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TallyAction::Add(amount) => {
                // Two writes that must never be observed half-applied
                state.total += amount;
                state.steps += 1;
            },
            TallyAction::Clear => *state = TallyState::default(),
        }
        smallvec![Effect::None]
    }
}

type TallyStore = Store<TallyState, TallyAction, (), TallyReducer>;

fn tally_store() -> TallyStore {
    Store::new(TallyState::default(), TallyReducer, ())
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_listener_receives_each_state_in_order() -> Result<(), StoreError> {
    let store = tally_store();
    let recorder = Recorder::new();
    let _subscription = store.subscribe(recorder.listener_for(|s: &TallyState| s.total));

    store.send(TallyAction::Add(5)).await?;
    store.send(TallyAction::Add(-2)).await?;
    store.send(TallyAction::Clear).await?;

    assert_eq!(recorder.values(), vec![5, 3, 0]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sends_never_expose_partial_state() {
    let store = tally_store();
    let recorder = Recorder::new();
    let _subscription = store.subscribe(recorder.listener_for(|s: &TallyState| (s.total, s.steps)));

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                let _ = store.send(TallyAction::Add(2)).await;
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("send task panicked");
    }

    let seen = recorder.values();
    assert_eq!(seen.len(), 50);
    for (idx, (total, steps)) in seen.into_iter().enumerate() {
        let expected_steps = u32::try_from(idx + 1).unwrap();
        assert_eq!(steps, expected_steps, "notifications arrived out of order");
        assert_eq!(total, i64::from(steps) * 2, "listener saw a half-applied state");
    }
}

#[tokio::test]
async fn test_multiple_listeners_and_scoped_release() -> Result<(), StoreError> {
    let store = tally_store();
    let first = Recorder::new();
    let second = Recorder::new();

    let first_subscription = store.subscribe(first.listener_for(|s: &TallyState| s.total));
    {
        let _second_subscription = store.subscribe(second.listener_for(|s: &TallyState| s.total));
        assert_eq!(store.listener_count(), 2);
        store.send(TallyAction::Add(1)).await?;
    }
    assert_eq!(store.listener_count(), 1);

    store.send(TallyAction::Add(1)).await?;
    first_subscription.unsubscribe();
    store.send(TallyAction::Add(1)).await?;

    assert_eq!(first.values(), vec![1, 2]);
    assert_eq!(second.values(), vec![1]);
    assert_eq!(store.listener_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_subscribe_actions_sees_sent_actions() -> Result<(), StoreError> {
    let store = Store::with_config(
        TallyState::default(),
        TallyReducer,
        (),
        StoreConfig::default().with_broadcast_capacity(4),
    );
    let mut actions = store.subscribe_actions();

    store.send(TallyAction::Add(3)).await?;
    store.send(TallyAction::Clear).await?;

    let first = tokio::time::timeout(Duration::from_secs(1), actions.recv())
        .await
        .expect("timed out")
        .expect("channel closed");
    let second = tokio::time::timeout(Duration::from_secs(1), actions.recv())
        .await
        .expect("timed out")
        .expect("channel closed");

    assert_eq!(first, TallyAction::Add(3));
    assert_eq!(second, TallyAction::Clear);
    Ok(())
}

#[tokio::test]
async fn test_snapshot_matches_state_reads() -> Result<(), StoreError> {
    let store = tally_store();
    store.send(TallyAction::Add(7)).await?;

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.total, 7);
    assert_eq!(snapshot.steps, 1);
    assert_eq!(store.state(|s| s.total).await, snapshot.total);
    Ok(())
}

#[tokio::test]
async fn test_listeners_survive_store_clone_drop() -> Result<(), StoreError> {
    let store = tally_store();
    let recorder = Recorder::new();
    let _subscription = store.subscribe(recorder.listener_for(|s: &TallyState| s.total));

    {
        let clone = store.clone();
        clone.send(TallyAction::Add(4)).await?;
    }

    store.send(TallyAction::Add(1)).await?;
    assert_eq!(recorder.values(), vec![4, 5]);
    Ok(())
}
