//! # Order Store Actor
//!
//! The in-memory persistent store: committed orders, their item rows and their
//! tracking row, priced against a [`PriceCatalog`](crate::model::PriceCatalog)
//! injected through `run(context)`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`PersistedOrder`]
//! - [`error`] - [`StoreError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`] for item rows and totals
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_webhook::clients::OrderStoreClient;
//! use order_webhook::model::PriceCatalog;
//! use order_webhook::order_store_actor;
//! use order_webhook::store::OrderStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_store_actor::new(32);
//!     let client = OrderStoreClient::new(generic_client);
//!     tokio::spawn(actor.run(Arc::new(PriceCatalog::default())));
//!
//!     let order_id = client.next_order_id().await?;
//!     client.insert_order_item("shirt", 2, order_id).await?;
//!     assert_eq!(client.total_order_price(order_id).await?, 50.0);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::{OrderId, PersistedOrder};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order Store actor and its client. Order ids count up from 1.
pub fn new(buffer_size: usize) -> (ResourceActor<PersistedOrder>, ResourceClient<PersistedOrder>) {
    let mut last_id = 0u32;
    ResourceActor::with_id_fn(buffer_size, move || {
        last_id += 1;
        OrderId(last_id)
    })
}
