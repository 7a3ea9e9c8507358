//! `reqwest`-backed catalog fetcher.

use super::{CatalogFetcher, FetchError, CATALOG_URL};
use crate::model::Product;
use async_trait::async_trait;
use tracing::debug;

/// Fetches the product catalog over HTTP.
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogFetcher {
    /// Targets the fixed production endpoint.
    pub fn new() -> Self {
        Self::with_url(CATALOG_URL)
    }

    /// Targets a custom endpoint (local fixtures, test servers).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for HttpCatalogFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        debug!(url = %self.url, "Fetching catalog");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let products: Vec<Product> =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        if let Some(bad) = products.iter().find(|product| product.price < 0.0) {
            return Err(FetchError::Malformed(format!(
                "negative price for {}",
                bad.id
            )));
        }

        debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }
}
