//! The persistent order store interface used when an order is committed or tracked.

use crate::model::OrderId;
use crate::order_store_actor::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
    /// Allocates the id of a new order.
    async fn next_order_id(&self) -> Result<OrderId, StoreError>;

    /// Writes one `(item, quantity)` row of `order_id`.
    async fn insert_order_item(
        &self,
        item: &str,
        quantity: u32,
        order_id: OrderId,
    ) -> Result<(), StoreError>;

    /// Writes the tracking row of `order_id`.
    async fn insert_order_tracking(&self, order_id: OrderId, status: &str)
        -> Result<(), StoreError>;

    async fn total_order_price(&self, order_id: OrderId) -> Result<f64, StoreError>;

    /// The tracking status, or `None` when the order (or its tracking row) does not exist.
    async fn order_status(&self, order_id: OrderId) -> Result<Option<String>, StoreError>;
}
