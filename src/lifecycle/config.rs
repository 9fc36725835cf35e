//! Runtime settings, from flags or `ORDER_WEBHOOK_*` environment variables.

use crate::model::{CatalogError, PriceCatalog};
use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Parser)]
#[command(name = "order-webhook", about = "Conversational order fulfillment webhook")]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    #[arg(long, env = "ORDER_WEBHOOK_LISTEN", default_value = "127.0.0.1:8000")]
    pub listen: SocketAddr,

    /// Capacity of each actor's request channel.
    #[arg(long, env = "ORDER_WEBHOOK_CHANNEL_BUFFER", default_value = "32")]
    pub channel_buffer: NonZeroUsize,

    /// JSON file of `{"item": price}` replacing the built-in catalog.
    #[arg(long, env = "ORDER_WEBHOOK_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl AppConfig {
    pub fn load_catalog(&self) -> Result<PriceCatalog, ConfigError> {
        match &self.catalog {
            Some(path) => Ok(PriceCatalog::from_json_file(path)?),
            None => Ok(PriceCatalog::default()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8000)),
            channel_buffer: NonZeroUsize::new(32).unwrap_or(NonZeroUsize::MIN),
            catalog: None,
        }
    }
}
