//! # Store Errors
//!
//! This module defines the common error types used throughout the snapshot
//! store. By centralizing error definitions, we ensure consistent error
//! handling across the actor and every client that talks to it.

/// Errors that can occur within the store itself.
///
/// `StoreClosed` and `StoreDropped` indicate a wiring bug (the store actor
/// was never started, or was shut down while callers still hold clients)
/// and are surfaced as hard failures at the call site rather than being
/// swallowed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Action error: {0}")]
    Action(Box<dyn std::error::Error + Send + Sync>),
}
