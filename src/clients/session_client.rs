//! # Session Client
//!
//! Provides a high‑level API for interacting with the `SessionCart` actor.
//! It wraps a `ResourceClient<SessionCart>` and implements [`SessionStore`]
//! with one actor request per operation.
use crate::model::{Cart, Removal, SessionCart, SessionId};
use crate::session_actor::{SessionAction, SessionActionResult, SessionError};
use crate::store::SessionStore;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<SessionCart>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<SessionCart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<SessionCart> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<SessionCart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<SessionError>() {
                Ok(err) => *err,
                Err(other) => SessionError::ActorCommunicationError(other.to_string()),
            },
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl SessionStore for SessionClient {
    #[instrument(skip(self))]
    async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, SessionError> {
        let entry = ActorClient::get(self, session_id.clone()).await?;
        Ok(entry.map(|entry| entry.cart))
    }

    #[instrument(skip(self))]
    async fn set(&self, session_id: &SessionId, cart: Cart) -> Result<(), SessionError> {
        debug!("Sending request");
        self.inner
            .insert(session_id.clone(), cart)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, session_id: &SessionId) -> Result<(), SessionError> {
        ActorClient::delete(self, session_id.clone()).await?;
        Ok(())
    }

    /// One `upsert`: merged into the stored cart, or a new entry.
    #[instrument(skip(self))]
    async fn merge(&self, session_id: &SessionId, items: Cart) -> Result<Cart, SessionError> {
        debug!("Sending request");
        self.inner
            .upsert(session_id.clone(), items)
            .await
            .map(|entry| entry.cart)
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn remove_items(
        &self,
        session_id: &SessionId,
        items: &[String],
    ) -> Result<Option<Removal>, SessionError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(session_id.clone(), SessionAction::RemoveItems(items.to_vec()))
            .await
        {
            Ok(SessionActionResult::RemoveItems(removal)) => Ok(Some(removal)),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// One `delete`, which hands the stored cart back.
    #[instrument(skip(self))]
    async fn take(&self, session_id: &SessionId) -> Result<Option<Cart>, SessionError> {
        let entry = ActorClient::delete(self, session_id.clone()).await?;
        Ok(entry.map(|entry| entry.cart))
    }
}
