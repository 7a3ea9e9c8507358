//! Fetch state machine tests against the real store actor, with scripted
//! settlement order. The gated mock is what makes the last-write-wins race
//! deterministic: both fetches are in flight at once, and the test decides
//! which one settles first.

use snapshot_store::StoreSubscription;
use std::sync::Arc;
use storefront::fetch::{FetchError, MockCatalogFetcher};
use storefront::lifecycle::Storefront;
use storefront::model::{Product, ProductId};
use storefront::state::{AppState, CatalogPhase};

fn sample_items() -> Vec<Product> {
    vec![Product::new(ProductId(1), "Backpack", 109.95, "https://img/1.jpg")]
}

async fn wait_for_phase(
    snapshots: &mut StoreSubscription<AppState>,
    phase: CatalogPhase,
) -> AppState {
    loop {
        let snapshot = snapshots.recv().await.expect("store should be alive");
        if snapshot.catalog.phase == phase {
            return snapshot;
        }
    }
}

#[tokio::test]
async fn test_successful_fetch_populates_items() {
    let fetcher = MockCatalogFetcher::new();
    fetcher.push_ok(sample_items());
    let system = Storefront::new(Arc::new(fetcher));
    let mut snapshots = system.subscribe().await.unwrap();

    system.catalog.start_fetch().await.unwrap();

    // start_fetch returns with the machine already in Loading.
    let loading = system.catalog.catalog().await.unwrap();
    assert!(matches!(
        loading.phase,
        CatalogPhase::Loading | CatalogPhase::Succeeded
    ));

    let snapshot = wait_for_phase(&mut snapshots, CatalogPhase::Succeeded).await;
    assert_eq!(snapshot.catalog.items, sample_items());
    assert!(snapshot.catalog.error.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_fetch_sets_message_and_keeps_stale_items() {
    let fetcher = MockCatalogFetcher::new();
    fetcher.push_ok(sample_items());
    fetcher.push_err(FetchError::Status(503));
    let system = Storefront::new(Arc::new(fetcher));
    let mut snapshots = system.subscribe().await.unwrap();

    system.catalog.start_fetch().await.unwrap();
    wait_for_phase(&mut snapshots, CatalogPhase::Succeeded).await;

    system.catalog.start_fetch().await.unwrap();
    let snapshot = wait_for_phase(&mut snapshots, CatalogPhase::Failed).await;

    let error = snapshot.catalog.error.expect("failure carries a message");
    assert!(!error.is_empty());
    assert_eq!(error, "HTTP 503");
    assert_eq!(
        snapshot.catalog.items,
        sample_items(),
        "stale items stay visible instead of flickering away"
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_loading_clears_previous_error() {
    let fetcher = MockCatalogFetcher::new();
    fetcher.push_err(FetchError::Status(500));
    let gate = fetcher.push_gated_ok(sample_items());
    let system = Storefront::new(Arc::new(fetcher));
    let mut snapshots = system.subscribe().await.unwrap();

    system.catalog.start_fetch().await.unwrap();
    wait_for_phase(&mut snapshots, CatalogPhase::Failed).await;

    // Re-entering Loading clears the error; the gate keeps the second
    // fetch pending so Loading is what we observe.
    system.catalog.start_fetch().await.unwrap();
    let snapshot = wait_for_phase(&mut snapshots, CatalogPhase::Loading).await;
    assert!(snapshot.catalog.error.is_none());

    // Release the pending fetch so its task lets go of the store client.
    drop(gate);
    system.shutdown().await.unwrap();
}

/// The §-scenario race: the first fetch fails but settles *after* the
/// second (successful) one. Whichever settles last owns the final state.
#[tokio::test]
async fn test_last_write_wins_when_failure_settles_last() {
    let fetcher = MockCatalogFetcher::new();
    let fail_gate = fetcher.push_gated_err(FetchError::Status(502));
    let success_gate = fetcher.push_gated_ok(sample_items());
    let system = Storefront::new(Arc::new(fetcher));
    let mut snapshots = system.subscribe().await.unwrap();

    // Two overlapping fetches, both pending behind their gates.
    system.catalog.start_fetch().await.unwrap();
    system.catalog.start_fetch().await.unwrap();

    // The success settles first...
    success_gate.send(()).unwrap();
    let snapshot = wait_for_phase(&mut snapshots, CatalogPhase::Succeeded).await;
    assert_eq!(snapshot.catalog.items, sample_items());

    // ...and the stale failure lands afterwards, overwriting the phase.
    fail_gate.send(()).unwrap();
    let snapshot = wait_for_phase(&mut snapshots, CatalogPhase::Failed).await;
    assert_eq!(snapshot.catalog.error.as_deref(), Some("HTTP 502"));
    assert_eq!(
        snapshot.catalog.items,
        sample_items(),
        "items from the earlier success are retained"
    );

    system.shutdown().await.unwrap();
}

/// Mirror image: the failure settles first, the success last, and the
/// final state is the successful payload.
#[tokio::test]
async fn test_last_write_wins_when_success_settles_last() {
    let fetcher = MockCatalogFetcher::new();
    let fail_gate = fetcher.push_gated_err(FetchError::Status(502));
    let success_gate = fetcher.push_gated_ok(sample_items());
    let system = Storefront::new(Arc::new(fetcher));
    let mut snapshots = system.subscribe().await.unwrap();

    system.catalog.start_fetch().await.unwrap();
    system.catalog.start_fetch().await.unwrap();

    fail_gate.send(()).unwrap();
    wait_for_phase(&mut snapshots, CatalogPhase::Failed).await;

    success_gate.send(()).unwrap();
    let snapshot = wait_for_phase(&mut snapshots, CatalogPhase::Succeeded).await;
    assert_eq!(snapshot.catalog.items, sample_items());

    system.shutdown().await.unwrap();
}
