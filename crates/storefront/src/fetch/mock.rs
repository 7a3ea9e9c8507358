//! Scripted catalog fetcher for tests.
//!
//! Each call pops the next scripted response. A response may carry a gate:
//! the fetch then suspends until the test fires the gate's sender, which
//! lets a test overlap two fetches and decide which one settles first,
//! the only way to exercise the last-write-wins race deterministically.

use super::{CatalogFetcher, FetchError};
use crate::model::Product;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;

struct ScriptedFetch {
    gate: Option<oneshot::Receiver<()>>,
    result: Result<Vec<Product>, FetchError>,
}

/// A fetcher that answers from a scripted queue of responses.
#[derive(Default)]
pub struct MockCatalogFetcher {
    scripts: Mutex<VecDeque<ScriptedFetch>>,
}

impl MockCatalogFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts an immediate successful settlement.
    pub fn push_ok(&self, items: Vec<Product>) {
        self.push(None, Ok(items));
    }

    /// Scripts an immediate failed settlement.
    pub fn push_err(&self, error: FetchError) {
        self.push(None, Err(error));
    }

    /// Scripts a successful settlement held behind a gate; the returned
    /// sender releases it.
    pub fn push_gated_ok(&self, items: Vec<Product>) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        self.push(Some(receiver), Ok(items));
        sender
    }

    /// Scripts a failed settlement held behind a gate.
    pub fn push_gated_err(&self, error: FetchError) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        self.push(Some(receiver), Err(error));
        sender
    }

    fn push(&self, gate: Option<oneshot::Receiver<()>>, result: Result<Vec<Product>, FetchError>) {
        self.scripts
            .lock()
            .unwrap()
            .push_back(ScriptedFetch { gate, result });
    }
}

#[async_trait]
impl CatalogFetcher for MockCatalogFetcher {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .expect("Unexpected fetch: no scripted response left");

        if let Some(gate) = script.gate {
            // A dropped gate sender also releases the fetch; tests that
            // only care about ordering can drop instead of firing.
            let _ = gate.await;
        }
        script.result
    }
}
