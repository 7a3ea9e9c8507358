//! # Notification Client
//!
//! The toast feed controller. Enqueue appends an independently dismissible
//! entry and hands back its id; dismiss runs the entry's `on_dismiss`
//! callback and removes it, both inside the store turn. Removal is the
//! exactly-once guard: a repeated dismiss finds no entry, so the callback
//! can never fire twice.

use crate::clients::snapshot_client::SnapshotClient;
use crate::model::{NotificationCallback, NotificationEntry, NotificationId, NotificationVariant};
use crate::state::{AppAction, AppActionResult, AppState, NotificationEvent};
use async_trait::async_trait;
use snapshot_store::{StoreClient, StoreError};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur during notification operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotificationError {
    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<String> for NotificationError {
    fn from(msg: String) -> Self {
        NotificationError::StoreCommunication(msg)
    }
}

/// Client for the notification feed.
#[derive(Clone)]
pub struct NotificationClient {
    store: StoreClient<AppState>,
}

impl NotificationClient {
    pub fn new(store: StoreClient<AppState>) -> Self {
        Self { store }
    }

    /// Append an entry to the feed and return its id.
    ///
    /// Never merges with existing entries: enqueueing the same message
    /// twice yields two entries, each dismissible on its own.
    #[instrument(skip(self, on_dismiss))]
    pub async fn enqueue(
        &self,
        variant: NotificationVariant,
        message: String,
        on_dismiss: Option<NotificationCallback>,
    ) -> Result<NotificationId, NotificationError> {
        debug!("Sending request");
        match self
            .store
            .apply(AppAction::Notification(NotificationEvent::Enqueue {
                variant,
                message,
                on_dismiss,
            }))
            .await
        {
            Ok(AppActionResult::Enqueued(id)) => Ok(id),
            Ok(_) => unreachable!("Enqueue must return Enqueued result"),
            Err(e) => Err(NotificationError::StoreCommunication(e.to_string())),
        }
    }

    /// Dismiss the entry with `id`. The feed runs the entry's
    /// `on_dismiss` callback exactly once and drops the entry, inside the
    /// store turn. Unknown ids are a benign no-op.
    #[instrument(skip(self))]
    pub async fn dismiss(&self, id: NotificationId) -> Result<(), NotificationError> {
        debug!("Sending request");
        match self
            .store
            .apply(AppAction::Notification(NotificationEvent::Dismiss(id)))
            .await
        {
            Ok(AppActionResult::Dismissed(_)) => Ok(()),
            Ok(_) => unreachable!("Dismiss must return Dismissed result"),
            Err(e) => Err(NotificationError::StoreCommunication(e.to_string())),
        }
    }

    /// The live entries, oldest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<NotificationEntry>, NotificationError> {
        Ok(self.snapshot().await?.notifications.entries().to_vec())
    }
}

#[async_trait]
impl SnapshotClient for NotificationClient {
    type Error = NotificationError;

    fn store(&self) -> &StoreClient<AppState> {
        &self.store
    }

    fn map_error(e: StoreError) -> Self::Error {
        NotificationError::StoreCommunication(e.to_string())
    }
}
