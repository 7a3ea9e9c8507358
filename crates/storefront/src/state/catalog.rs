//! Catalog slice: the asynchronous fetch state machine.
//!
//! The machine is deliberately small: `Idle → Loading → {Succeeded,
//! Failed}`, re-entered via a fresh `FetchStarted`. Overlapping fetches are
//! not deduplicated; events apply in settlement order, so whichever call
//! settles last owns the final state (last-write-wins).

use crate::model::Product;

/// Shown when a failed fetch carries no usable message of its own.
pub const FETCH_ERROR_FALLBACK: &str = "Failed to fetch products";

/// Discrete state of the fetch machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Catalog slice of the application snapshot.
///
/// `items` keeps the server response order and is *not* cleared when a
/// later fetch enters `Loading` or settles `Failed`: stale items stay
/// visible instead of flickering away under the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub items: Vec<Product>,
    pub phase: CatalogPhase,
    pub error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: CatalogPhase::Idle,
            error: None,
        }
    }
}

/// Fetch lifecycle events, applied inside the store turn.
#[derive(Debug)]
pub enum CatalogEvent {
    /// A fetch was kicked off.
    FetchStarted,
    /// The remote call resolved with a well-formed payload.
    FetchSucceeded { items: Vec<Product> },
    /// The remote call rejected or returned malformed data.
    FetchFailed { message: String },
}

impl CatalogState {
    /// Applies one fetch lifecycle event.
    pub fn transition(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::FetchStarted => {
                self.phase = CatalogPhase::Loading;
                self.error = None;
            }
            CatalogEvent::FetchSucceeded { items } => {
                self.items = items;
                self.phase = CatalogPhase::Succeeded;
            }
            CatalogEvent::FetchFailed { message } => {
                self.phase = CatalogPhase::Failed;
                self.error = Some(if message.trim().is_empty() {
                    FETCH_ERROR_FALLBACK.to_string()
                } else {
                    message
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn shoe() -> Product {
        Product::new(ProductId(5), "Shoe", 10.0, "x")
    }

    #[test]
    fn test_start_clears_error_and_enters_loading() {
        let mut state = CatalogState::default();
        state.error = Some("old failure".into());
        state.transition(CatalogEvent::FetchStarted);
        assert_eq!(state.phase, CatalogPhase::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_success_stores_payload() {
        let mut state = CatalogState::default();
        state.transition(CatalogEvent::FetchStarted);
        state.transition(CatalogEvent::FetchSucceeded {
            items: vec![shoe()],
        });
        assert_eq!(state.phase, CatalogPhase::Succeeded);
        assert_eq!(state.items, vec![shoe()]);
    }

    #[test]
    fn test_failure_keeps_stale_items() {
        let mut state = CatalogState::default();
        state.transition(CatalogEvent::FetchSucceeded {
            items: vec![shoe()],
        });
        state.transition(CatalogEvent::FetchStarted);
        state.transition(CatalogEvent::FetchFailed {
            message: "HTTP 503".into(),
        });
        assert_eq!(state.phase, CatalogPhase::Failed);
        assert_eq!(state.error.as_deref(), Some("HTTP 503"));
        assert_eq!(state.items, vec![shoe()], "stale items survive a failure");
    }

    #[test]
    fn test_blank_failure_message_falls_back() {
        let mut state = CatalogState::default();
        state.transition(CatalogEvent::FetchFailed {
            message: "  ".into(),
        });
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_FALLBACK));
    }

    #[test]
    fn test_events_apply_in_settlement_order() {
        // Two overlapping fetches: the success settles first, the failure
        // second. The failure owns the final phase, the items stay.
        let mut state = CatalogState::default();
        state.transition(CatalogEvent::FetchStarted);
        state.transition(CatalogEvent::FetchStarted);
        state.transition(CatalogEvent::FetchSucceeded {
            items: vec![shoe()],
        });
        state.transition(CatalogEvent::FetchFailed {
            message: "timed out".into(),
        });
        assert_eq!(state.phase, CatalogPhase::Failed);
        assert_eq!(state.items, vec![shoe()]);
    }
}
