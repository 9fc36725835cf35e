//! Entity trait implementation for [`PersistedOrder`].
//!
//! The context is the shared price catalog: it decides which items may be
//! written as rows and what each row costs.

use super::actions::{OrderAction, OrderActionResult};
use super::error::StoreError;
use crate::model::{NewOrder, OrderId, OrderLine, PersistedOrder, PriceCatalog, TrackingUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
impl ActorEntity for PersistedOrder {
    type Id = OrderId;
    type Create = NewOrder;
    type Update = TrackingUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = Arc<PriceCatalog>;
    type Error = StoreError;

    fn from_create_params(id: OrderId, _params: NewOrder) -> Result<Self, Self::Error> {
        Ok(Self::new(id))
    }

    /// Writes (or rewrites) the tracking row.
    async fn on_update(
        &mut self,
        update: TrackingUpdate,
        _catalog: &Arc<PriceCatalog>,
    ) -> Result<(), Self::Error> {
        self.status = Some(update.status);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        catalog: &Arc<PriceCatalog>,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::AddLine { item, quantity } => {
                if catalog.price(&item).is_none() {
                    return Err(StoreError::UnknownItem(item));
                }
                self.lines.push(OrderLine { item, quantity });
                Ok(OrderActionResult::AddLine(()))
            }
            OrderAction::Total => {
                let mut total = 0.0;
                for line in &self.lines {
                    let price = catalog
                        .price(&line.item)
                        .ok_or_else(|| StoreError::UnknownItem(line.item.clone()))?;
                    total += price * f64::from(line.quantity);
                }
                Ok(OrderActionResult::Total(total))
            }
        }
    }
}
