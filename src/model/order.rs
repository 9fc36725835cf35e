/// A committed order as kept by the order store.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for PersistedOrder`](#impl-ActorEntity-for-PersistedOrder) for details on:
/// - Creation parameters ([`NewOrder`])
/// - Update parameters ([`TrackingUpdate`])
/// - Custom actions ([`OrderAction`](crate::order_store_actor::OrderAction))
use std::fmt::Display;

/// Status written to the tracking row of every freshly committed order.
pub const STATUS_IN_PROGRESS: &str = "in progress";

/// Store-assigned order number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One `(item, quantity)` row of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersistedOrder {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    /// The tracking row; `None` until one has been written.
    pub status: Option<String>,
}

impl PersistedOrder {
    /// An order with no item rows and no tracking row yet.
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            status: None,
        }
    }
}

/// Payload for allocating a new, empty order record.
#[derive(Debug, Clone, Default)]
pub struct NewOrder;

/// Payload that writes the tracking row.
#[derive(Debug, Clone)]
pub struct TrackingUpdate {
    pub status: String,
}
