//! # Generic Client
//!
//! This module defines the generic client for communicating with a store
//! actor.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::snapshot::StoreSnapshot;
use crate::subscription::{StoreSubscription, SubscriptionId};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// The `StoreClient<S>` provides an async API for reading and mutating the
/// snapshot held by a `StoreActor<S>`. It forwards requests over a Tokio
/// mpsc channel and returns results via oneshot channels. The client is
/// cheap to clone and can be shared across tasks and controllers.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – all methods return `Future`s that resolve to
///   `Result<…, StoreError>`.
/// * **Generic** – works with any state shape that implements
///   [`StoreSnapshot`].
///
/// Every method fails with [`StoreError::StoreClosed`] once the actor is
/// gone. That situation is an initialization/shutdown-order bug in the
/// caller's wiring, so the error is returned rather than swallowed.
#[derive(Clone)]
pub struct StoreClient<S: StoreSnapshot> {
    sender: mpsc::Sender<StoreRequest<S>>,
}

impl<S: StoreSnapshot> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>) -> Self {
        Self { sender }
    }

    /// Read the current snapshot.
    pub async fn get(&self) -> Result<S, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Shallow-merge `patch` into the snapshot and return the result.
    ///
    /// Subscribers are notified exactly once, inside the same actor turn,
    /// before this call resolves.
    pub async fn patch(&self, patch: S::Patch) -> Result<S, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Patch { patch, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Run a domain action inside the actor turn.
    pub async fn apply(&self, action: S::Action) -> Result<S::ActionResult, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Apply { action, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Register a subscriber that receives one snapshot per mutation.
    pub async fn subscribe(&self) -> Result<StoreSubscription<S>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Subscribe { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Remove a subscriber registration. Unknown ids are a no-op.
    pub async fn unsubscribe(&self, id: SubscriptionId) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Unsubscribe { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}
