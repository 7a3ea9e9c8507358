//! # Storefront Interaction-State Core
//!
//! The state core of a client-side storefront: a product catalog fetched
//! from a remote API, a shopping cart, a single-active modal dialog, and a
//! notification (toast) feed. Rendering is somebody else's job: this
//! crate owns every observable state transition and hands declarative
//! snapshots to whatever surface draws them.
//!
//! ## Core Components
//!
//! - **[state]**: The [`AppState`](state::AppState) snapshot and the pure
//!   transition logic for each slice: the catalog fetch machine, the cart
//!   reducer, and the notification feed.
//! - **[model]**: Pure data types ([`Product`](model::Product),
//!   [`CartLine`](model::CartLine),
//!   [`DialogDescriptor`](model::DialogDescriptor),
//!   [`NotificationEntry`](model::NotificationEntry)).
//! - **[clients]**: The imperative controllers
//!   ([`CatalogClient`](clients::CatalogClient),
//!   [`CartClient`](clients::CartClient),
//!   [`DialogClient`](clients::DialogClient),
//!   [`NotificationClient`](clients::NotificationClient)) that other parts
//!   of the application call into.
//! - **[fetch]**: The remote catalog boundary, an HTTP implementation and
//!   a scripted mock behind one trait.
//! - **[lifecycle]**: The [`Storefront`](lifecycle::Storefront)
//!   orchestrator that wires everything together.
//!
//! ## Quick Start
//!
//! The demo binary (`src/main.rs`) walks the whole flow: fetch the
//! catalog, add a product, gate its removal behind a confirmation dialog,
//! toast the outcome, shut down.
//!
//! ## Testing
//!
//! See [`snapshot_store::mock`] for testing controllers without a live
//! store, and [`fetch::MockCatalogFetcher`] for scripting fetch
//! settlements (including their order, for the last-write-wins race).

pub mod clients;
pub mod fetch;
pub mod lifecycle;
pub mod model;
pub mod state;
