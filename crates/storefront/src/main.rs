//! # Storefront Demo
//!
//! Walks the interaction-state core end to end against the real catalog
//! endpoint, standing in for the rendering surface:
//!
//! 1.  Fetch the catalog and wait for the settlement.
//! 2.  Add the first product to the cart (with a success toast).
//! 3.  Gate its removal behind a confirmation dialog, "press" Confirm the
//!     way a surface would (invoke the descriptor's callback), and watch
//!     the cart empty out.
//! 4.  Dismiss the toasts and shut down.

use snapshot_store::tracing::setup_tracing;
use std::sync::Arc;
use storefront::lifecycle::Storefront;
use storefront::model::NotificationVariant;
use storefront::state::CatalogPhase;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront core");

    let system = Storefront::with_remote_catalog();
    let mut snapshots = system.subscribe().await.map_err(|e| e.to_string())?;

    // Fetch the catalog and wait for the machine to leave Loading.
    let span = tracing::info_span!("catalog_fetch");
    let catalog = async {
        info!("Fetching catalog");
        system
            .catalog
            .start_fetch()
            .await
            .map_err(|e| e.to_string())?;

        loop {
            let snapshot = snapshots.recv().await.ok_or("store shut down early")?;
            if snapshot.catalog.phase != CatalogPhase::Loading {
                break Ok::<_, String>(snapshot.catalog);
            }
        }
    }
    .instrument(span)
    .await?;

    if catalog.phase == CatalogPhase::Failed {
        error!(
            error = catalog.error.as_deref().unwrap_or_default(),
            "Catalog fetch failed"
        );
        return system.shutdown().await;
    }

    info!(count = catalog.items.len(), "Catalog loaded");
    let product = match catalog.items.first() {
        Some(product) => product.clone(),
        None => {
            info!("Catalog is empty, nothing to demo");
            return system.shutdown().await;
        }
    };

    // Add to cart, toast the outcome.
    let span = tracing::info_span!("cart_flow");
    async {
        system
            .cart
            .add_to_cart(product.clone())
            .await
            .map_err(|e| e.to_string())?;
        system
            .notifications
            .enqueue(
                NotificationVariant::Success,
                format!("{} added to cart", product.title),
                None,
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(product_id = %product.id, "Added to cart");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Gate the removal behind a confirmation dialog. The callbacks do what
    // a surface-level handler would: dispatch the mutation, then hide.
    let on_confirm = {
        let cart = system.cart.clone();
        let dialog = system.dialog.clone();
        let notifications = system.notifications.clone();
        let product_id = product.id;
        let title = product.title.clone();
        Arc::new(move || {
            let cart = cart.clone();
            let dialog = dialog.clone();
            let notifications = notifications.clone();
            let title = title.clone();
            tokio::spawn(async move {
                let _ = cart.remove_from_cart(product_id).await;
                let _ = dialog.hide().await;
                let _ = notifications
                    .enqueue(
                        NotificationVariant::Info,
                        format!("{} removed from cart", title),
                        None,
                    )
                    .await;
            });
        })
    };
    let on_cancel = {
        let dialog = system.dialog.clone();
        Arc::new(move || {
            let dialog = dialog.clone();
            tokio::spawn(async move {
                let _ = dialog.hide().await;
            });
        })
    };

    system
        .dialog
        .confirm(
            format!("Remove {} from the cart?", product.title),
            on_confirm,
            on_cancel,
        )
        .await
        .map_err(|e| e.to_string())?;

    // The surface would render the descriptor and wait for a click; here
    // we press Confirm directly.
    let descriptor = system
        .dialog
        .current()
        .await
        .map_err(|e| e.to_string())?
        .ok_or("confirmation dialog should be live")?;
    if let Some(on_primary) = descriptor.on_primary.as_ref() {
        on_primary();
    }

    // Watch the snapshots until the confirm handler has run its course.
    loop {
        let snapshot = snapshots.recv().await.ok_or("store shut down early")?;
        if snapshot.cart.is_empty() && snapshot.dialog.is_none() {
            break;
        }
    }
    info!("Cart emptied after confirmation");

    // Dismiss what is left of the toast feed.
    for entry in system
        .notifications
        .list()
        .await
        .map_err(|e| e.to_string())?
    {
        system
            .notifications
            .dismiss(entry.id)
            .await
            .map_err(|e| e.to_string())?;
    }

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
