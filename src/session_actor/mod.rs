//! # Session Actor
//!
//! Holds every conversation's in-progress cart, keyed by [`SessionId`](crate::model::SessionId).
//! Entries live as long as the process; nothing is persisted.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`SessionCart`]
//! - [`error`] - [`SessionError`] type for type-safe error handling
//! - [`actions`] - [`SessionAction`] and [`SessionActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Atomicity
//!
//! Every cart mutation the order session needs is a single request, so it runs
//! to completion before the next request for any session is looked at:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | add items | `upsert` (merge into the existing cart, or start one) |
//! | remove items | `perform_action(RemoveItems)` |
//! | finish the order | `delete` (hands the cart back and forgets it) |
//!
//! Two concurrent adds on the same session therefore both land, in arrival order.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::SessionCart;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Session actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<SessionCart>, ResourceClient<SessionCart>) {
    ResourceActor::new(buffer_size)
}
