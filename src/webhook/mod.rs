//! # Webhook
//!
//! Dialogue-platform fulfillment over HTTP. Everything here is translation:
//! JSON in, an [`Intent`](crate::order_session::Intent) and a
//! [`SessionId`](crate::model::SessionId) for the order session, JSON out.
//!
//! ```text
//! POST /        {"queryResult": {...}}  ->  200 {"fulfillmentText": "..."}
//! GET  /health                          ->  200 {"status": "ok"}
//! ```

pub mod params;
pub mod payload;
pub mod server;
pub mod session_id;

pub use params::{resolve_intent, ADD_INTENT, COMPLETE_INTENT, REMOVE_INTENT, TRACK_INTENT};
pub use payload::*;
pub use server::*;
pub use session_id::extract_session_id;
