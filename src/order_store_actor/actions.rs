//! Custom actions for the Order Store actor.
//!
//! These are handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action)
//! on [`PersistedOrder`](crate::model::PersistedOrder).

/// Custom actions for persisted orders.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Appends one `(item, quantity)` row.
    ///
    /// # Errors
    /// Fails when the item is not in the price catalog.
    AddLine { item: String, quantity: u32 },
    /// Sums price × quantity over the order's rows.
    Total,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    AddLine(()),
    Total(f64),
}
