//! # Observability & Tracing
//!
//! This module provides the tracing setup for applications built on the
//! snapshot store.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. The store actor logs its lifecycle (`Store started`,
//! `Shutdown`), every mutation (`Patched`, `Applied`, with the number of
//! subscribers notified), and failures (`Apply failed`); controller clients
//! add `#[instrument]` spans on top, so a request can be followed from the
//! intent call down to the store turn that applied it.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! the structured `snapshot_type` field identifies the store instead.
//! Log levels are controlled via the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full patch/action payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, requests log their full payload once at the
//! store boundary (`Patch patch=AppPatch { .. }`); at `info` only the
//! mutation outcome lines remain.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - snapshot_type identifies the store
        .compact()
        .init();
}
