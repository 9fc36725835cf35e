use crate::clients::{OrderStoreClient, SessionClient};
use crate::lifecycle::config::{AppConfig, ConfigError};
use crate::model::PriceCatalog;
use crate::store::Stores;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Owns the running actors behind the webhook.
///
/// - **Session actor**: in-progress carts, keyed by session id
/// - **Order store actor**: committed orders, priced against the catalog
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&AppConfig::default())?;
/// webhook::serve(listener, system.stores(), shutdown_signal()).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub session_client: SessionClient,
    pub order_store_client: OrderStoreClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Loads the price catalog named by `config` and starts the actors.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let catalog = config.load_catalog()?;
        Ok(Self::with_catalog(config.channel_buffer.get(), catalog))
    }

    /// Starts the actors with an explicit catalog.
    ///
    /// # Panics
    /// When `buffer_size` is zero.
    pub fn with_catalog(buffer_size: usize, catalog: PriceCatalog) -> Self {
        // 1. Create actors (no dependencies)
        let (session_actor, session_client) = crate::session_actor::new(buffer_size);
        let (order_store_actor, order_store_client) = crate::order_store_actor::new(buffer_size);

        // 2. Start actors with injected context
        let session_handle = tokio::spawn(session_actor.run(()));
        let order_store_handle = tokio::spawn(order_store_actor.run(Arc::new(catalog)));

        Self {
            session_client: SessionClient::new(session_client),
            order_store_client: OrderStoreClient::new(order_store_client),
            handles: vec![session_handle, order_store_handle],
        }
    }

    /// The stores a webhook call works with, backed by this system's actors.
    pub fn stores(&self) -> Stores {
        Stores::new(self.session_client.clone(), self.order_store_client.clone())
    }

    /// Drops the system's clients and waits for both actors to stop.
    ///
    /// An actor stops once every clone of its client is gone, so anything
    /// holding [`stores`](Self::stores) (the HTTP server, a test) must have
    /// let go first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.session_client);
        drop(self.order_store_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
