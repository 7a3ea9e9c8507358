//! Remote catalog access.
//!
//! The catalog comes from a single HTTP GET returning a JSON array of
//! products. The [`CatalogFetcher`] trait is the seam between the fetch
//! state machine and the transport: production wires in the
//! [`HttpCatalogFetcher`], tests script a [`MockCatalogFetcher`] whose
//! settlement order they control. Failures never cross this boundary as
//! panics or bubbled errors; the caller folds them into catalog state.

pub mod http;
pub mod mock;

pub use http::HttpCatalogFetcher;
pub use mock::MockCatalogFetcher;

use crate::model::Product;
use async_trait::async_trait;
use thiserror::Error;

/// The fixed remote catalog endpoint.
pub const CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Failure input to the fetch state machine.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The body was not a well-formed product array.
    #[error("Malformed catalog payload: {0}")]
    Malformed(String),
}

/// One outbound catalog call.
///
/// Implementations perform exactly one request per invocation: no retries,
/// no timeout, no cancellation. Overlap handling (last-write-wins) lives
/// entirely in the state layer.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}
