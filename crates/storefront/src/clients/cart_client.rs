//! # Cart Client
//!
//! Routes cart intents through the store's reducer. Both operations are
//! total: adding an id already in the cart and removing an absent id are
//! defined no-ops, so the only error surface is store communication.

use crate::clients::snapshot_client::SnapshotClient;
use crate::model::{CartLine, Product, ProductId};
use crate::state::{AppAction, AppActionResult, AppState, CartEvent};
use async_trait::async_trait;
use snapshot_store::{StoreClient, StoreError};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::StoreCommunication(msg)
    }
}

/// Client for the cart slice.
#[derive(Clone)]
pub struct CartClient {
    store: StoreClient<AppState>,
}

impl CartClient {
    pub fn new(store: StoreClient<AppState>) -> Self {
        Self { store }
    }

    /// Add a product to the cart, capturing its denormalized copy.
    /// A no-op if a line with the same id already exists (first add wins).
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: Product) -> Result<(), CartError> {
        debug!("Sending request");
        self.dispatch(CartEvent::AddToCart(product)).await
    }

    /// Remove the line with `id`; a no-op if it is absent.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        self.dispatch(CartEvent::RemoveFromCart(id)).await
    }

    /// Read the current cart lines, insertion order.
    #[instrument(skip(self))]
    pub async fn lines(&self) -> Result<Vec<CartLine>, CartError> {
        Ok(self.snapshot().await?.cart)
    }

    async fn dispatch(&self, event: CartEvent) -> Result<(), CartError> {
        match self.store.apply(AppAction::Cart(event)).await {
            Ok(AppActionResult::Applied) => Ok(()),
            Ok(_) => unreachable!("Cart events must return Applied result"),
            Err(e) => Err(CartError::StoreCommunication(e.to_string())),
        }
    }
}

#[async_trait]
impl SnapshotClient for CartClient {
    type Error = CartError;

    fn store(&self) -> &StoreClient<AppState> {
        &self.store
    }

    fn map_error(e: StoreError) -> Self::Error {
        CartError::StoreCommunication(e.to_string())
    }
}
