use crate::clients::{CartClient, CatalogClient, DialogClient, NotificationClient};
use crate::fetch::{CatalogFetcher, HttpCatalogFetcher};
use crate::state::AppState;
use snapshot_store::{StoreActor, StoreClient, StoreError, StoreSubscription};
use std::sync::Arc;
use tracing::{error, info};

/// The main runtime orchestrator for the storefront core.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the store actor
/// - **Dependency Wiring**: Handing the shared store client and the
///   catalog fetcher to the controllers that need them
/// - **The subscription surface**: Giving the rendering surface its
///   read-only snapshot stream
///
/// # Architecture
///
/// One `StoreActor<AppState>` owns every slice of state. Four controller
/// clients share its request channel:
/// - **CatalogClient**: drives the fetch state machine
/// - **CartClient**: routes add/remove intents through the cart reducer
/// - **DialogClient**: the single-active-dialog slot
/// - **NotificationClient**: the toast feed
///
/// # Example
///
/// ```ignore
/// let system = Storefront::with_remote_catalog();
///
/// let mut snapshots = system.subscribe().await?;
/// system.catalog.start_fetch().await?;
/// system.cart.add_to_cart(product).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client driving the catalog fetch machine
    pub catalog: CatalogClient,

    /// Client for cart intents
    pub cart: CartClient,

    /// Client for the single-active dialog
    pub dialog: DialogClient,

    /// Client for the notification feed
    pub notifications: NotificationClient,

    /// The shared store client (subscription + raw access)
    store: StoreClient<AppState>,

    /// Task handle for the store actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    /// Creates a storefront wired to the given catalog fetcher.
    ///
    /// Spawns the store actor holding a default `AppState` and builds the
    /// four controllers around clones of its client.
    pub fn new(fetcher: Arc<dyn CatalogFetcher>) -> Self {
        let (actor, store) = StoreActor::new(AppState::default(), 32);
        let handle = tokio::spawn(actor.run());

        Self {
            catalog: CatalogClient::new(store.clone(), fetcher),
            cart: CartClient::new(store.clone()),
            dialog: DialogClient::new(store.clone()),
            notifications: NotificationClient::new(store.clone()),
            store,
            handle,
        }
    }

    /// Creates a storefront against the fixed production catalog endpoint.
    pub fn with_remote_catalog() -> Self {
        Self::new(Arc::new(HttpCatalogFetcher::new()))
    }

    /// Register a snapshot subscriber for the rendering surface: one
    /// `AppState` clone per mutation, in mutation order.
    pub async fn subscribe(&self) -> Result<StoreSubscription<AppState>, StoreError> {
        self.store.subscribe().await
    }

    /// The shared store client, for callers that need raw access.
    pub fn store(&self) -> &StoreClient<AppState> {
        &self.store
    }

    /// Gracefully shuts down the core.
    ///
    /// Dropping the controllers closes the store's request channel once
    /// in-flight fetch tasks (which hold their own client clones) have
    /// settled; the actor drains the queue, exits, and this method awaits
    /// it.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        // Closing the channel requires dropping every sender: the four
        // controllers and the shared client.
        drop(self.catalog);
        drop(self.cart);
        drop(self.dialog);
        drop(self.notifications);
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store actor task failed: {:?}", e);
            return Err(format!("Store actor task failed: {:?}", e));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
