//! # Snapshot Store
//!
//! This crate provides the foundational building block for single-owner
//! application state in Rust: a message-driven **snapshot store**. One
//! actor task owns the whole application snapshot; cloneable clients read
//! it, patch it, run domain actions against it, and subscribe to the
//! stream of snapshots it produces.
//!
//! ## Why an actor-owned store?
//!
//! UI-state cores want two guarantees that are awkward to get from shared
//! mutable state:
//!
//! - **One consistent snapshot per observer notification**: a subscriber
//!   must never see a half-applied mutation.
//! - **Run-to-completion transitions**: nothing may preempt the gap
//!   between a mutation and the notification it triggers.
//!
//! Routing every operation through one mpsc channel into one sequentially
//! processing task gives both for free. The channel is the sole
//! serialization point: no locks, no torn reads, and read-after-write
//! within a turn (a `get` issued after a `patch` resolves against the
//! patched snapshot).
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Snapshot Layer** ([`StoreSnapshot`]) - Your state shape and domain logic
//! 2. **Runtime Layer** ([`StoreActor`]) - Request processing and fan-out
//! 3. **Interface Layer** ([`StoreClient`]) - Type-safe communication
//!
//! You describe your state **once** in the snapshot trait (a shallow-merge
//! patch DTO and a domain action enum), and the runtime handles the message
//! passing, subscriber bookkeeping, and error surfacing.
//!
//! ## Example
//!
//! ```rust
//! use snapshot_store::{StoreActor, StoreSnapshot};
//!
//! // 1. Define the snapshot
//! #[derive(Clone, Debug, PartialEq)]
//! struct Prefs {
//!     theme: String,
//! }
//!
//! #[derive(Debug)]
//! struct PrefsPatch {
//!     theme: Option<String>,
//! }
//!
//! #[derive(Debug)]
//! enum PrefsAction {
//!     Reset,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("Prefs error")]
//! struct PrefsError;
//!
//! impl StoreSnapshot for Prefs {
//!     type Patch = PrefsPatch;
//!     type Action = PrefsAction;
//!     type ActionResult = ();
//!     type Error = PrefsError;
//!
//!     fn merge(&mut self, patch: PrefsPatch) {
//!         if let Some(theme) = patch.theme {
//!             self.theme = theme;
//!         }
//!     }
//!
//!     fn apply(&mut self, action: PrefsAction) -> Result<(), PrefsError> {
//!         match action {
//!             PrefsAction::Reset => {
//!                 self.theme = "light".to_string();
//!                 Ok(())
//!             }
//!         }
//!     }
//! }
//!
//! // 2. Use the store
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::new(Prefs { theme: "light".into() }, 10);
//!     tokio::spawn(actor.run());
//!
//!     let mut sub = client.subscribe().await.unwrap();
//!     let updated = client
//!         .patch(PrefsPatch { theme: Some("dark".into()) })
//!         .await
//!         .unwrap();
//!     assert_eq!(updated.theme, "dark");
//!
//!     // The subscriber saw the same mutation, exactly once.
//!     assert_eq!(sub.recv().await.unwrap().theme, "dark");
//! }
//! ```
//!
//! ## Asynchronous work
//!
//! The snapshot hooks are synchronous on purpose. Anything that suspends
//! (an HTTP fetch, a timer) runs in its own task holding a client clone and
//! reports back by sending an `apply` once it settles. Overlapping
//! operations therefore land in settlement order: the last writer wins,
//! and no transition ever interleaves with another.
//!
//! ## Shutdown & misuse
//!
//! The actor exits once every client clone is dropped. A client call made
//! after that returns [`StoreError::StoreClosed`]: a wiring bug in the
//! caller, surfaced as a hard error rather than ignored.
//!
//! ## Testing
//!
//! The [`mock`] module provides a scripted mock store for unit-testing
//! controller logic without spawning the actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod snapshot;
pub mod subscription;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use snapshot::StoreSnapshot;
pub use subscription::{StoreSubscription, SubscriptionId};
