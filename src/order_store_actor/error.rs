//! Error types for the Order Store actor.

use thiserror::Error;

/// Errors that can occur during order store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The item has no price in the catalog, so no row can be written for it.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        StoreError::ActorCommunicationError(msg)
    }
}
