/// Catalog product and cart line types.
///
/// `Product` mirrors the remote catalog payload and is immutable once
/// fetched. `CartLine` is the cart-side record: it shares the product id
/// and carries a denormalized copy of the display fields captured at
/// add time, so a later catalog refresh never rewrites what the user put
/// in the cart.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products, assigned by the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// One entry of the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the remote catalog)
    /// * `title` - Product title
    /// * `price` - Product price, non-negative
    /// * `image` - Product image URI
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}

/// One line of the shopping cart. At most one line exists per product id.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl From<Product> for CartLine {
    /// Captures the denormalized copy of the product at add time.
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
        }
    }
}
