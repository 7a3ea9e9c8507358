//! # Store Messages
//!
//! This module defines the generic message types used for communication
//! between `StoreClient` and `StoreActor`.
//!
//! # The single mutation entry point
//! Every read and write of the application snapshot travels through this
//! enum over one mpsc channel. The actor dequeues requests one at a time
//! and runs each to completion, which makes the channel the sole
//! serialization point: no lock is needed between a mutation and the
//! subscriber notification that follows it, and a `Get` enqueued after a
//! `Patch` always observes the patched snapshot.
//!
//! # Snapshot interaction
//! This type is generic over `S: StoreSnapshot`. It uses the associated
//! types defined on the [`StoreSnapshot`] trait (`Patch`, `Action`,
//! `ActionResult`) to keep every operation payload tied to the snapshot
//! shape it belongs to.

use crate::error::StoreError;
use crate::snapshot::StoreSnapshot;
use crate::subscription::{StoreSubscription, SubscriptionId};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal request type sent to the store actor.
#[derive(Debug)]
pub enum StoreRequest<S: StoreSnapshot> {
    /// Read the current snapshot.
    Get { respond_to: Response<S> },
    /// Shallow-merge a patch, notify subscribers, return the new snapshot.
    Patch {
        patch: S::Patch,
        respond_to: Response<S>,
    },
    /// Run a domain action inside the actor turn.
    Apply {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
    /// Register a new snapshot subscriber.
    Subscribe {
        respond_to: Response<StoreSubscription<S>>,
    },
    /// Remove a subscriber; unknown ids are a no-op.
    Unsubscribe {
        id: SubscriptionId,
        respond_to: Response<()>,
    },
}
