//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the core component that owns the
//! application snapshot. It implements the "Server" side of the store,
//! processing requests sequentially and ensuring exclusive access to the
//! state.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::snapshot::StoreSnapshot;
use crate::subscription::{StoreSubscription, SubscriptionId};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// One registered subscriber: its id plus the sending half of its channel.
struct Subscriber<S> {
    id: SubscriptionId,
    sender: mpsc::UnboundedSender<S>,
}

/// The generic actor that owns one application snapshot.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state
/// (`snapshot`), the subscriber registry, and the receiver end of the
/// request channel.
///
/// **Concurrency Model**:
/// The actor processes its requests *sequentially* in a loop, so no
/// `Mutex` or `RwLock` is needed around the snapshot: exclusive ownership
/// of state within the task gives safety for free. Each request runs to
/// completion, including the subscriber fan-out, before the next request
/// is dequeued. That sequencing is exactly the guarantee observers rely
/// on:
///
/// * **Read-after-write**: a `Get` enqueued after a `Patch` observes the
///   patched snapshot.
/// * **One notification per mutation**: every successful `Patch`/`Apply`
///   sends each live subscriber exactly one snapshot clone, in mutation
///   order.
/// * **Settlement order**: asynchronous work (e.g. an HTTP fetch) reports
///   its outcome by sending a fresh `Apply`; overlapping operations land in
///   the order they settle, so the last writer wins.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new(initial, capacity)` to get the
///     `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client into whichever controllers need it.
///
/// The actor shuts down when every client clone has been dropped: the
/// channel closes, `recv()` returns `None`, and the loop exits after
/// draining the requests already queued.
pub struct StoreActor<S: StoreSnapshot> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    snapshot: S,
    subscribers: Vec<Subscriber<S>>,
    next_subscription: u32,
}

impl<S: StoreSnapshot> StoreActor<S> {
    /// Creates a new `StoreActor` holding `initial` and its associated
    /// `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `initial` - The snapshot value the store starts with.
    /// * `buffer_size` - The capacity of the request channel. If the
    ///   channel is full, calls on the client wait until there is space.
    pub fn new(initial: S, buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            snapshot: initial,
            subscribers: Vec::new(),
            next_subscription: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until the channel
    /// closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g. "AppState" instead of
        // "storefront::state::AppState")
        let snapshot_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(snapshot_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Get { respond_to } => {
                    debug!(snapshot_type, "Get");
                    let _ = respond_to.send(Ok(self.snapshot.clone()));
                }
                StoreRequest::Patch { patch, respond_to } => {
                    debug!(snapshot_type, ?patch, "Patch");
                    self.snapshot.merge(patch);
                    let delivered = self.notify();
                    info!(snapshot_type, delivered, "Patched");
                    let _ = respond_to.send(Ok(self.snapshot.clone()));
                }
                StoreRequest::Apply { action, respond_to } => {
                    debug!(snapshot_type, ?action, "Apply");
                    match self.snapshot.apply(action) {
                        Ok(result) => {
                            let delivered = self.notify();
                            info!(snapshot_type, delivered, "Applied");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(snapshot_type, error = %e, "Apply failed");
                            let _ = respond_to.send(Err(StoreError::Action(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Subscribe { respond_to } => {
                    let id = SubscriptionId::from(self.next_subscription);
                    self.next_subscription += 1;
                    let (sender, receiver) = mpsc::unbounded_channel();
                    self.subscribers.push(Subscriber { id, sender });
                    info!(snapshot_type, %id, subscribers = self.subscribers.len(), "Subscribed");
                    let _ = respond_to.send(Ok(StoreSubscription::new(id, receiver)));
                }
                StoreRequest::Unsubscribe { id, respond_to } => {
                    let before = self.subscribers.len();
                    self.subscribers.retain(|sub| sub.id != id);
                    let removed = before != self.subscribers.len();
                    debug!(snapshot_type, %id, removed, "Unsubscribe");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(
            snapshot_type,
            subscribers = self.subscribers.len(),
            "Shutdown"
        );
    }

    /// Sends the current snapshot to every live subscriber, pruning the
    /// ones whose receiving half has been dropped. Returns the number of
    /// subscribers actually notified.
    fn notify(&mut self) -> usize {
        let snapshot = &self.snapshot;
        self.subscribers
            .retain(|sub| sub.sender.send(snapshot.clone()).is_ok());
        self.subscribers.len()
    }
}
