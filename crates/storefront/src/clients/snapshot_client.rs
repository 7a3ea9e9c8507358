//! # SnapshotClient Trait
//!
//! Provides a common interface for the controller clients, adding a default
//! `snapshot` read built on top of the generic `StoreClient<AppState>`.
//!
//! Every controller wraps the same store client; this trait pins down the
//! two things each one must supply (access to that client and the mapping
//! from [`StoreError`] into its own error type) and derives the shared
//! read path from them.

use crate::state::AppState;
use async_trait::async_trait;
use snapshot_store::{StoreClient, StoreError};

/// Trait for controller clients to inherit the standard snapshot read.
#[async_trait]
pub trait SnapshotClient: Send + Sync {
    /// The controller-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn store(&self) -> &StoreClient<AppState>;

    /// Map store errors to the specific controller error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Read the current application snapshot.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<AppState, Self::Error> {
        tracing::debug!("Sending request");
        self.store().get().await.map_err(Self::map_error)
    }
}
