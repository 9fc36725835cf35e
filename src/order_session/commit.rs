//! Writes a finished cart to the order store.
//!
//! The store offers no transactions. Rows written before a failing item row
//! stay where they are, and a failed tracking row is logged but does not fail
//! the commit.

use crate::model::{Cart, OrderId, STATUS_IN_PROGRESS};
use crate::order_store_actor::StoreError;
use crate::store::OrderStore;
use tracing::{error, info, instrument};

/// Allocates an order id, writes one row per cart item in cart order, then the
/// `"in progress"` tracking row.
#[instrument(skip(orders, cart), fields(items = cart.len()))]
pub async fn commit_cart(orders: &dyn OrderStore, cart: &Cart) -> Result<OrderId, StoreError> {
    let order_id = orders.next_order_id().await?;

    for (item, quantity) in cart.iter() {
        if let Err(e) = orders.insert_order_item(item, quantity, order_id).await {
            error!(%order_id, item, error = %e, "Item row rejected, aborting commit");
            return Err(e);
        }
    }

    if let Err(e) = orders
        .insert_order_tracking(order_id, STATUS_IN_PROGRESS)
        .await
    {
        error!(%order_id, error = %e, "Tracking row not written");
    }

    info!(%order_id, "Order committed");
    Ok(order_id)
}
