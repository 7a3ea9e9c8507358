//! # Snapshot Subscriptions
//!
//! A subscriber receives one snapshot clone per store mutation, in mutation
//! order, over an unbounded channel. The channel is unbounded so the actor
//! can fan out notifications without ever blocking its message loop; the
//! memory bound is the subscriber's responsibility (a rendering surface
//! drains every snapshot it is sent).
//!
//! Dropping a [`StoreSubscription`] is a valid way to unsubscribe: the
//! actor prunes closed channels on the next notification. The explicit
//! `unsubscribe(id)` client call removes the registration immediately.

use std::fmt::Display;
use tokio::sync::mpsc;

/// Identifier for one subscriber registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

impl From<u32> for SubscriptionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub_{}", self.0)
    }
}

/// Receiving half of a snapshot subscription.
#[derive(Debug)]
pub struct StoreSubscription<S> {
    id: SubscriptionId,
    receiver: mpsc::UnboundedReceiver<S>,
}

impl<S> StoreSubscription<S> {
    pub(crate) fn new(id: SubscriptionId, receiver: mpsc::UnboundedReceiver<S>) -> Self {
        Self { id, receiver }
    }

    /// The id to pass to `unsubscribe`.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Wait for the next snapshot. Returns `None` once the store actor has
    /// shut down (or this subscription was explicitly unsubscribed) and all
    /// pending snapshots have been drained.
    pub async fn recv(&mut self) -> Option<S> {
        self.receiver.recv().await
    }

    /// Non-blocking variant of [`StoreSubscription::recv`].
    pub fn try_recv(&mut self) -> Option<S> {
        self.receiver.try_recv().ok()
    }
}
