//! # Mock Store & Testing Guide
//!
//! Utilities for testing controller logic without spawning a real
//! `StoreActor`.
//!
//! # Testing Strategy
//! In unit tests we usually don't want to spin up a full `StoreActor` if we
//! are just testing the logic *around* the store (a controller client, say).
//! Instead we create a "mock store": a client whose requests land on a
//! channel the test controls (`receiver`). The test inspects each request,
//! asserts it is the one expected, and answers it through the bundled
//! oneshot sender, simulating success, failure, and ordering
//! deterministically.
//!
//! Three patterns cover the suite:
//!
//! 1. **Client logic test (mock store)**: drive a controller client
//!    against [`create_mock_store`]; assert on the requests it sends and
//!    script the responses. Fast and fully deterministic.
//! 2. **Single store test (real actor)**: spawn a `StoreActor` with a
//!    small snapshot type and exercise it through its client. Tests the
//!    actor loop itself (see this crate's integration tests).
//! 3. **Full system test**: wire the real actor plus all controllers and
//!    walk an end-to-end flow (see the application crate's `tests/`).

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::snapshot::StoreSnapshot;
use tokio::sync::mpsc;

/// Creates a mock store client and a receiver for asserting requests.
pub fn create_mock_store<S: StoreSnapshot>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next request is a Get.
pub async fn expect_get<S: StoreSnapshot>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<tokio::sync::oneshot::Sender<Result<S, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next request is a Patch.
pub async fn expect_patch<S: StoreSnapshot>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(
    S::Patch,
    tokio::sync::oneshot::Sender<Result<S, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Patch { patch, respond_to }) => Some((patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is an Apply.
pub async fn expect_apply<S: StoreSnapshot>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(
    S::Action,
    tokio::sync::oneshot::Sender<Result<S::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Apply { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StoreSnapshot;

    #[derive(Clone, Debug, PartialEq)]
    struct Prefs {
        theme: String,
        volume: u32,
    }

    #[derive(Debug)]
    struct PrefsPatch {
        theme: Option<String>,
        volume: Option<u32>,
    }

    #[derive(Debug)]
    enum PrefsAction {
        Mute,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Prefs error")]
    struct PrefsError;

    impl StoreSnapshot for Prefs {
        type Patch = PrefsPatch;
        type Action = PrefsAction;
        type ActionResult = u32;
        type Error = PrefsError;

        fn merge(&mut self, patch: PrefsPatch) {
            if let Some(theme) = patch.theme {
                self.theme = theme;
            }
            if let Some(volume) = patch.volume {
                self.volume = volume;
            }
        }

        fn apply(&mut self, action: PrefsAction) -> Result<u32, PrefsError> {
            match action {
                PrefsAction::Mute => {
                    let previous = self.volume;
                    self.volume = 0;
                    Ok(previous)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_mock_store_scripts_patch_response() {
        let (client, mut receiver) = create_mock_store::<Prefs>(10);

        let patch_task = tokio::spawn(async move {
            client
                .patch(PrefsPatch {
                    theme: Some("dark".to_string()),
                    volume: None,
                })
                .await
        });

        let (patch, responder) = expect_patch(&mut receiver)
            .await
            .expect("Expected Patch request");
        assert_eq!(patch.theme.as_deref(), Some("dark"));
        assert!(patch.volume.is_none());

        responder
            .send(Ok(Prefs {
                theme: "dark".to_string(),
                volume: 7,
            }))
            .unwrap();

        let result = patch_task.await.unwrap().unwrap();
        assert_eq!(result.theme, "dark");
    }

    #[tokio::test]
    async fn test_mock_store_scripts_apply_failure() {
        let (client, mut receiver) = create_mock_store::<Prefs>(10);

        let apply_task = tokio::spawn(async move { client.apply(PrefsAction::Mute).await });

        let (action, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert!(matches!(action, PrefsAction::Mute));

        responder
            .send(Err(StoreError::Action(Box::new(PrefsError))))
            .unwrap();

        let result = apply_task.await.unwrap();
        assert!(matches!(result, Err(StoreError::Action(_))));
    }

    #[tokio::test]
    async fn test_mock_store_reports_closed_channel() {
        let (client, receiver) = create_mock_store::<Prefs>(10);
        drop(receiver);

        let result = client.get().await;
        assert!(matches!(result, Err(StoreError::StoreClosed)));
    }
}
