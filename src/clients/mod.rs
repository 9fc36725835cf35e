//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient)
//! that back the [`store`](crate::store) traits.

pub mod order_store_client;
pub mod session_client;

pub use order_store_client::*;
pub use session_client::*;
