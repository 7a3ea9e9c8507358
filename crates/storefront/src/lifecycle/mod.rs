//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the storefront core:
//! starting the store actor, wiring the controller clients, exposing the
//! rendering surface's subscription, and coordinating graceful shutdown.
//!
//! ## The Orchestration Pattern
//!
//! The individual pieces are simple; **wiring them together** is where the
//! mistakes live. [`Storefront`] is the one place that:
//!
//! 1. **Creates** the store actor with the initial `AppState`
//! 2. **Injects** the catalog fetcher (real HTTP or a scripted mock)
//! 3. **Shares** the store client across all four controllers
//! 4. **Shuts down** cleanly: drop the clients, let the actor drain its
//!    queue, await the task
//!
//! Because the controllers cannot exist before the store actor does,
//! initialization order is enforced by construction: there is no ambient
//! "used outside provider" state to check at call time. The only residual
//! misuse is calling a controller after shutdown, which every client
//! surfaces as a hard `StoreClosed`-backed error.
//!
//! ## Observability
//!
//! Call `snapshot_store::tracing::setup_tracing()` once at startup;
//! `RUST_LOG=info` shows mutation outcomes, `RUST_LOG=debug` adds full
//! patch/action payloads at the store boundary.

pub mod system;

pub use system::*;
