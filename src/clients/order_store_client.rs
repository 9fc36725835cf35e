//! # Order Store Client
//!
//! Provides a high‑level API for interacting with the `PersistedOrder` actor.
//! It wraps a `ResourceClient<PersistedOrder>` and implements [`OrderStore`].
use crate::model::{NewOrder, OrderId, PersistedOrder, TrackingUpdate};
use crate::order_store_actor::{OrderAction, OrderActionResult, StoreError};
use crate::store::OrderStore;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order Store actor.
#[derive(Clone)]
pub struct OrderStoreClient {
    inner: ResourceClient<PersistedOrder>,
}

impl OrderStoreClient {
    pub fn new(inner: ResourceClient<PersistedOrder>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<PersistedOrder> for OrderStoreClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<PersistedOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => StoreError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<StoreError>() {
                Ok(err) => *err,
                Err(other) => StoreError::ActorCommunicationError(other.to_string()),
            },
            other => StoreError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderStore for OrderStoreClient {
    #[instrument(skip(self))]
    async fn next_order_id(&self) -> Result<OrderId, StoreError> {
        debug!("Sending request");
        self.inner.create(NewOrder).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn insert_order_item(
        &self,
        item: &str,
        quantity: u32,
        order_id: OrderId,
    ) -> Result<(), StoreError> {
        debug!("Sending request");
        let action = OrderAction::AddLine {
            item: item.to_string(),
            quantity,
        };
        match self.inner.perform_action(order_id, action).await {
            Ok(OrderActionResult::AddLine(())) => Ok(()),
            Ok(other) => Err(StoreError::ActorCommunicationError(format!(
                "AddLine answered with {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    async fn insert_order_tracking(
        &self,
        order_id: OrderId,
        status: &str,
    ) -> Result<(), StoreError> {
        debug!("Sending request");
        let update = TrackingUpdate {
            status: status.to_string(),
        };
        self.inner
            .update(order_id, update)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn total_order_price(&self, order_id: OrderId) -> Result<f64, StoreError> {
        debug!("Sending request");
        match self.inner.perform_action(order_id, OrderAction::Total).await {
            Ok(OrderActionResult::Total(total)) => Ok(total),
            Ok(other) => Err(StoreError::ActorCommunicationError(format!(
                "Total answered with {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    async fn order_status(&self, order_id: OrderId) -> Result<Option<String>, StoreError> {
        let order = ActorClient::get(self, order_id).await?;
        Ok(order.and_then(|order| order.status))
    }
}
