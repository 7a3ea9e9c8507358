//! # Dialog Client
//!
//! The single-active-dialog controller. At most one descriptor is live at
//! a time; `show` unconditionally replaces whatever is current *without*
//! invoking the replaced descriptor's callbacks. The old dialog is simply
//! abandoned, not cancelled. Selection handling belongs to the rendering
//! surface: it invokes the descriptor's callbacks, and those callers are
//! responsible for calling `hide` once they have acted (the controller
//! never auto-hides).

use crate::clients::snapshot_client::SnapshotClient;
use crate::model::{DialogCallback, DialogDescriptor};
use crate::state::{AppPatch, AppState};
use async_trait::async_trait;
use snapshot_store::{StoreClient, StoreError};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur during dialog operations.
///
/// The only failure is a dead store: a wiring bug, surfaced hard at the
/// call site rather than silently ignored.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DialogError {
    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<String> for DialogError {
    fn from(msg: String) -> Self {
        DialogError::StoreCommunication(msg)
    }
}

/// Client for the single-active-dialog slot.
#[derive(Clone)]
pub struct DialogClient {
    store: StoreClient<AppState>,
}

impl DialogClient {
    pub fn new(store: StoreClient<AppState>) -> Self {
        Self { store }
    }

    /// Make `descriptor` the live dialog, replacing any current one.
    #[instrument(skip(self, descriptor), fields(title = %descriptor.title))]
    pub async fn show(&self, descriptor: DialogDescriptor) -> Result<(), DialogError> {
        debug!("Sending request");
        self.set(Some(descriptor)).await
    }

    /// Clear the dialog slot.
    #[instrument(skip(self))]
    pub async fn hide(&self) -> Result<(), DialogError> {
        debug!("Sending request");
        self.set(None).await
    }

    /// The live descriptor, if any.
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<Option<DialogDescriptor>, DialogError> {
        Ok(self.snapshot().await?.dialog)
    }

    /// Shows the standard confirmation dialog for `message`, wiring
    /// `on_confirm`/`on_cancel` to the Confirm/Cancel buttons. Both
    /// callbacks are expected to call [`DialogClient::hide`] themselves.
    #[instrument(skip(self, on_confirm, on_cancel))]
    pub async fn confirm(
        &self,
        message: String,
        on_confirm: DialogCallback,
        on_cancel: DialogCallback,
    ) -> Result<(), DialogError> {
        self.show(DialogDescriptor::confirmation(message, on_confirm, on_cancel))
            .await
    }

    async fn set(&self, dialog: Option<DialogDescriptor>) -> Result<(), DialogError> {
        self.store
            .patch(AppPatch {
                dialog: Some(dialog),
                ..Default::default()
            })
            .await
            .map(|_| ())
            .map_err(|e| DialogError::StoreCommunication(e.to_string()))
    }
}

#[async_trait]
impl SnapshotClient for DialogClient {
    type Error = DialogError;

    fn store(&self) -> &StoreClient<AppState> {
        &self.store
    }

    fn map_error(e: StoreError) -> Self::Error {
        DialogError::StoreCommunication(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DialogVariant, CANCEL_LABEL, CONFIRMATION_TITLE, CONFIRM_LABEL};
    use snapshot_store::mock::{create_mock_store, expect_patch};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_confirm_builds_the_standard_descriptor() {
        let (store, mut receiver) = create_mock_store::<AppState>(10);
        let client = DialogClient::new(store);

        let confirm_task = tokio::spawn(async move {
            client
                .confirm(
                    "Remove this item?".to_string(),
                    Arc::new(|| {}),
                    Arc::new(|| {}),
                )
                .await
        });

        let (patch, responder) = expect_patch(&mut receiver)
            .await
            .expect("Expected Patch request");
        let descriptor = patch
            .dialog
            .expect("dialog slice must be patched")
            .expect("show patches a descriptor in");
        assert_eq!(descriptor.variant, DialogVariant::Info);
        assert_eq!(descriptor.title, CONFIRMATION_TITLE);
        assert_eq!(descriptor.message, "Remove this item?");
        assert_eq!(descriptor.primary_label.as_deref(), Some(CONFIRM_LABEL));
        assert_eq!(descriptor.secondary_label, CANCEL_LABEL);
        assert!(descriptor.on_primary.is_some());
        assert!(!descriptor.busy);

        responder.send(Ok(AppState::default())).unwrap();
        confirm_task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_hide_patches_the_slot_clear() {
        let (store, mut receiver) = create_mock_store::<AppState>(10);
        let client = DialogClient::new(store);

        let hide_task = tokio::spawn(async move { client.hide().await });

        let (patch, responder) = expect_patch(&mut receiver)
            .await
            .expect("Expected Patch request");
        assert!(matches!(patch.dialog, Some(None)));
        assert!(patch.cart.is_none(), "only the dialog slice is patched");

        responder.send(Ok(AppState::default())).unwrap();
        hide_task.await.unwrap().unwrap();
    }
}
