//! The application snapshot and its store wiring.
//!
//! `AppState` is the single state value owned by the store actor: catalog,
//! cart, dialog slot, and notification feed. Controllers never hold state
//! of their own; they read and mutate these slices exclusively through
//! the store's request channel, which is what guarantees one consistent
//! snapshot per observer notification.

pub mod cart;
pub mod catalog;
pub mod notifications;

pub use cart::CartEvent;
pub use catalog::{CatalogEvent, CatalogPhase, CatalogState, FETCH_ERROR_FALLBACK};
pub use notifications::{NotificationEvent, NotificationFeed};

use crate::model::{CartLine, DialogDescriptor, NotificationEntry, NotificationId};
use snapshot_store::StoreSnapshot;
use std::convert::Infallible;

/// The authoritative application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: Vec<CartLine>,
    pub dialog: Option<DialogDescriptor>,
    pub notifications: NotificationFeed,
}

/// Shallow-merge patch: each `Some` field replaces its whole slice.
///
/// Note the dialog field is doubly optional: `Some(None)` clears the slot
/// (hide), `Some(Some(descriptor))` replaces it (show), `None` leaves it
/// alone.
#[derive(Debug, Default)]
pub struct AppPatch {
    pub catalog: Option<CatalogState>,
    pub cart: Option<Vec<CartLine>>,
    pub dialog: Option<Option<DialogDescriptor>>,
    pub notifications: Option<NotificationFeed>,
}

/// Domain events routed through the store's apply path.
#[derive(Debug)]
pub enum AppAction {
    Catalog(CatalogEvent),
    Cart(CartEvent),
    Notification(NotificationEvent),
}

/// Results from AppActions - variants match 1:1 with the action groups.
#[derive(Debug)]
pub enum AppActionResult {
    /// Result for catalog and cart events - pure transitions return nothing.
    Applied,
    /// Result from Enqueue - the id assigned to the new entry.
    Enqueued(NotificationId),
    /// Result from Dismiss - the removed entry, `None` for unknown ids.
    Dismissed(Option<NotificationEntry>),
}

impl StoreSnapshot for AppState {
    type Patch = AppPatch;
    type Action = AppAction;
    type ActionResult = AppActionResult;
    // Every transition is total: unknown-id removals and dismissals are
    // defined as no-ops, not errors.
    type Error = Infallible;

    fn merge(&mut self, patch: AppPatch) {
        if let Some(catalog) = patch.catalog {
            self.catalog = catalog;
        }
        if let Some(cart) = patch.cart {
            self.cart = cart;
        }
        if let Some(dialog) = patch.dialog {
            self.dialog = dialog;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
    }

    fn apply(&mut self, action: AppAction) -> Result<AppActionResult, Infallible> {
        match action {
            AppAction::Catalog(event) => {
                self.catalog.transition(event);
                Ok(AppActionResult::Applied)
            }
            AppAction::Cart(event) => {
                self.cart = cart::reduce(std::mem::take(&mut self.cart), event);
                Ok(AppActionResult::Applied)
            }
            AppAction::Notification(NotificationEvent::Enqueue {
                variant,
                message,
                on_dismiss,
            }) => Ok(AppActionResult::Enqueued(self.notifications.enqueue(
                variant,
                message,
                on_dismiss,
            ))),
            AppAction::Notification(NotificationEvent::Dismiss(id)) => {
                Ok(AppActionResult::Dismissed(self.notifications.dismiss(id)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DialogCallback, DialogVariant, Product, ProductId};
    use std::sync::Arc;

    fn noop() -> DialogCallback {
        Arc::new(|| {})
    }

    #[test]
    fn test_merge_replaces_only_patched_slices() {
        let mut state = AppState::default();
        state.cart = vec![CartLine::from(Product::new(
            ProductId(1),
            "Hat",
            5.0,
            "x",
        ))];

        state.merge(AppPatch {
            dialog: Some(Some(DialogDescriptor::new(
                DialogVariant::Danger,
                "Heads up",
                "Something happened",
                "Close",
                noop(),
            ))),
            ..Default::default()
        });

        assert!(state.dialog.is_some());
        assert_eq!(state.cart.len(), 1, "unpatched slices are untouched");
    }

    #[test]
    fn test_merge_clears_dialog_with_some_none() {
        let mut state = AppState::default();
        state.dialog = Some(DialogDescriptor::new(
            DialogVariant::Info,
            "Title",
            "Message",
            "Close",
            noop(),
        ));

        state.merge(AppPatch {
            dialog: Some(None),
            ..Default::default()
        });
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_apply_routes_events_to_their_slices() {
        let mut state = AppState::default();

        let result = state
            .apply(AppAction::Cart(CartEvent::AddToCart(Product::new(
                ProductId(5),
                "Shoe",
                10.0,
                "x",
            ))))
            .unwrap();
        assert!(matches!(result, AppActionResult::Applied));
        assert_eq!(state.cart.len(), 1);

        let result = state
            .apply(AppAction::Notification(NotificationEvent::Enqueue {
                variant: crate::model::NotificationVariant::Success,
                message: "Added to cart".into(),
                on_dismiss: None,
            }))
            .unwrap();
        let id = match result {
            AppActionResult::Enqueued(id) => id,
            other => panic!("expected Enqueued, got {:?}", other),
        };

        let result = state
            .apply(AppAction::Notification(NotificationEvent::Dismiss(id)))
            .unwrap();
        assert!(matches!(result, AppActionResult::Dismissed(Some(_))));
        assert!(state.notifications.is_empty());
    }
}
