//! # Catalog Client
//!
//! Drives the asynchronous fetch state machine. `start_fetch` moves the
//! catalog to `Loading` before it returns, then hands the actual network
//! call to a background task; the task reports its settlement by posting a
//! catalog event back into the store queue. Overlapping fetches are not
//! deduplicated: settlements land in arrival order, so the last one wins.

use crate::clients::snapshot_client::SnapshotClient;
use crate::fetch::CatalogFetcher;
use crate::state::{AppAction, AppActionResult, AppState, CatalogEvent, CatalogState};
use async_trait::async_trait;
use snapshot_store::{StoreClient, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Errors that can occur while driving catalog operations.
///
/// Network and payload failures are *not* represented here; they are
/// folded into [`CatalogState`] for the rendering surface to display.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::StoreCommunication(msg)
    }
}

/// Client for driving the catalog slice.
#[derive(Clone)]
pub struct CatalogClient {
    store: StoreClient<AppState>,
    fetcher: Arc<dyn CatalogFetcher>,
}

impl CatalogClient {
    pub fn new(store: StoreClient<AppState>, fetcher: Arc<dyn CatalogFetcher>) -> Self {
        Self { store, fetcher }
    }

    /// Kicks off one catalog fetch.
    ///
    /// Returns once the store has entered `Loading`; the settlement
    /// (`Succeeded`/`Failed`) arrives later through the store queue.
    /// Exactly one outbound call is made per invocation, with no retries
    /// and no cancellation of overlapping calls.
    #[instrument(skip(self))]
    pub async fn start_fetch(&self) -> Result<(), CatalogError> {
        debug!("Dispatching fetch start");
        match self
            .store
            .apply(AppAction::Catalog(CatalogEvent::FetchStarted))
            .await
        {
            Ok(AppActionResult::Applied) => {}
            Ok(_) => unreachable!("Catalog events must return Applied result"),
            Err(e) => return Err(CatalogError::StoreCommunication(e.to_string())),
        }

        let store = self.store.clone();
        let fetcher = self.fetcher.clone();
        tokio::spawn(async move {
            let event = match fetcher.fetch_products().await {
                Ok(items) => CatalogEvent::FetchSucceeded { items },
                Err(e) => CatalogEvent::FetchFailed {
                    message: e.to_string(),
                },
            };
            if let Err(e) = store.apply(AppAction::Catalog(event)).await {
                warn!(error = %e, "Fetch settled after store shutdown");
            }
        });

        Ok(())
    }

    /// Read the current catalog slice.
    #[instrument(skip(self))]
    pub async fn catalog(&self) -> Result<CatalogState, CatalogError> {
        Ok(self.snapshot().await?.catalog)
    }
}

#[async_trait]
impl SnapshotClient for CatalogClient {
    type Error = CatalogError;

    fn store(&self) -> &StoreClient<AppState> {
        &self.store
    }

    fn map_error(e: StoreError) -> Self::Error {
        CatalogError::StoreCommunication(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockCatalogFetcher;
    use crate::model::{Product, ProductId};
    use snapshot_store::mock::{create_mock_store, expect_apply};

    fn shoe() -> Product {
        Product::new(ProductId(5), "Shoe", 10.0, "x")
    }

    #[tokio::test]
    async fn test_start_fetch_dispatches_started_then_success() {
        let (store, mut receiver) = create_mock_store::<AppState>(10);
        let fetcher = MockCatalogFetcher::new();
        fetcher.push_ok(vec![shoe()]);
        let client = CatalogClient::new(store, Arc::new(fetcher));

        let start_task = tokio::spawn(async move { client.start_fetch().await });

        // First request: the synchronous Loading transition.
        let (action, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert!(matches!(
            action,
            AppAction::Catalog(CatalogEvent::FetchStarted)
        ));
        responder.send(Ok(AppActionResult::Applied)).unwrap();

        // start_fetch returns as soon as Loading is applied.
        start_task.await.unwrap().unwrap();

        // Second request: the settlement posted by the background task.
        let (action, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected settlement Apply");
        match action {
            AppAction::Catalog(CatalogEvent::FetchSucceeded { items }) => {
                assert_eq!(items, vec![shoe()]);
            }
            other => panic!("Expected FetchSucceeded, got {:?}", other),
        }
        responder.send(Ok(AppActionResult::Applied)).unwrap();
    }

    #[tokio::test]
    async fn test_start_fetch_maps_failure_into_message() {
        let (store, mut receiver) = create_mock_store::<AppState>(10);
        let fetcher = MockCatalogFetcher::new();
        fetcher.push_err(crate::fetch::FetchError::Status(503));
        let client = CatalogClient::new(store, Arc::new(fetcher));

        let start_task = tokio::spawn(async move { client.start_fetch().await });

        let (_, responder) = expect_apply(&mut receiver).await.unwrap();
        responder.send(Ok(AppActionResult::Applied)).unwrap();
        start_task.await.unwrap().unwrap();

        let (action, responder) = expect_apply(&mut receiver).await.unwrap();
        match action {
            AppAction::Catalog(CatalogEvent::FetchFailed { message }) => {
                assert_eq!(message, "HTTP 503");
            }
            other => panic!("Expected FetchFailed, got {:?}", other),
        }
        responder.send(Ok(AppActionResult::Applied)).unwrap();
    }
}
