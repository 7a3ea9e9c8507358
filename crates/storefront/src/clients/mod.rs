//! Controller clients: the imperative surface other parts of the
//! application call into. Each one wraps the shared `StoreClient<AppState>`
//! and exposes the intents of one slice.

pub mod cart_client;
pub mod catalog_client;
pub mod dialog_client;
pub mod notification_client;
pub mod snapshot_client;

pub use cart_client::{CartClient, CartError};
pub use catalog_client::{CatalogClient, CatalogError};
pub use dialog_client::{DialogClient, DialogError};
pub use notification_client::{NotificationClient, NotificationError};
pub use snapshot_client::SnapshotClient;
