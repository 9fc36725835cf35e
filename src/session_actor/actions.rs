//! Custom actions for the Session actor.
//!
//! These are handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action)
//! on [`SessionCart`](crate::model::SessionCart).

use crate::model::Removal;

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Removes the named items one by one, reporting each as removed or not found.
    /// The entry stays in place even when the cart ends up empty.
    RemoveItems(Vec<String>),
}

/// Results from SessionActions - variants match 1:1 with SessionAction
#[derive(Debug, Clone)]
pub enum SessionActionResult {
    RemoveItems(Removal),
}
