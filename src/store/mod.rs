//! Store interfaces the order session is written against, and the bundle it receives.
//!
//! Both traits are object safe; the running system backs them with actor
//! clients, tests back them with whatever they need.

pub mod order_store;
pub mod session_store;

pub use order_store::*;
pub use session_store::*;

use std::sync::Arc;

/// The stores one webhook call works with.
#[derive(Clone)]
pub struct Stores {
    pub sessions: Arc<dyn SessionStore>,
    pub orders: Arc<dyn OrderStore>,
}

impl Stores {
    pub fn new(sessions: impl SessionStore, orders: impl OrderStore) -> Self {
        Self {
            sessions: Arc::new(sessions),
            orders: Arc::new(orders),
        }
    }
}
