//! # StoreSnapshot Trait
//!
//! The `StoreSnapshot` trait defines the contract that an application state
//! value must implement to be managed by the generic `StoreActor`. It
//! specifies associated types for the shallow-merge patch DTO, the domain
//! action enum, the action result, and the action error, plus the two hooks
//! (`merge`, `apply`) the actor invokes inside its message loop.
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining a contract that the application snapshot must satisfy, the
//! `StoreActor` loop is written *once* and works for any state shape. The
//! associated types enforce safety: a store of snapshot `S` only ever
//! receives `S::Patch` and `S::Action` payloads, so you cannot send a patch
//! for one state shape to a store holding another. The compiler prevents
//! this class of bugs entirely.
//!
//! # Purity
//! Both hooks are synchronous and must not perform IO. Every mutation runs
//! to completion inside one actor turn, followed by exactly one subscriber
//! notification, before the next request is dequeued. Asynchronous work
//! (network calls and the like) lives *outside* the store and reports back
//! by sending a fresh `Apply` request once it settles.

use std::fmt::Debug;

/// Trait that an application state value must implement to be managed by
/// [`StoreActor`](crate::StoreActor).
///
/// # Merge vs Apply
/// `merge` is the raw write path: a patch DTO of `Option` fields where each
/// `Some` replaces the corresponding slice of the snapshot wholesale.
/// `apply` is the reducer path: a domain event is interpreted against the
/// current snapshot, producing a typed result. Both execute inside the
/// actor turn, so a read issued after either one observes the new snapshot.
pub trait StoreSnapshot: Clone + Send + Sync + 'static {
    /// Shallow-merge DTO. Each `Some` field replaces a whole snapshot slice.
    type Patch: Send + Debug;

    /// Domain event interpreted by [`StoreSnapshot::apply`].
    type Action: Send + Debug;

    /// The result type returned by `apply`.
    type ActionResult: Send + Debug;

    /// The error type for failed actions.
    /// Must implement std::error::Error for proper error propagation.
    /// Use `std::convert::Infallible` when every action is total.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Merge a patch into the snapshot, replacing each `Some` slice.
    fn merge(&mut self, patch: Self::Patch);

    /// Interpret a domain action against the snapshot.
    ///
    /// On `Err` the actor responds with the error and skips the subscriber
    /// notification for this turn; implementations should leave the
    /// snapshot untouched on the error path.
    fn apply(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
