//! The session store interface the order session runs against.

use crate::model::{Cart, Removal, SessionId};
use crate::session_actor::SessionError;
use async_trait::async_trait;

/// Session id to in-progress cart. Entries live as long as the process.
///
/// Only [`get`](SessionStore::get), [`set`](SessionStore::set) and
/// [`delete`](SessionStore::delete) are required. The compound operations have
/// default implementations built from those three; they are **not** atomic, so
/// concurrent calls for one session can lose updates. Implementations that can
/// do better, like [`SessionClient`](crate::clients::SessionClient), override them.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, SessionError>;

    /// Stores `cart`, replacing any existing entry.
    async fn set(&self, session_id: &SessionId, cart: Cart) -> Result<(), SessionError>;

    /// Forgets the entry; a no-op when there is none.
    async fn delete(&self, session_id: &SessionId) -> Result<(), SessionError>;

    /// Merges `items` into the session's cart, starting one if needed, and
    /// returns the whole cart.
    async fn merge(&self, session_id: &SessionId, items: Cart) -> Result<Cart, SessionError> {
        let mut cart = self.get(session_id).await?.unwrap_or_default();
        cart.merge(items);
        self.set(session_id, cart.clone()).await?;
        Ok(cart)
    }

    /// Removes `items` from the session's cart. `None` when there is no entry,
    /// in which case nothing is touched.
    async fn remove_items(
        &self,
        session_id: &SessionId,
        items: &[String],
    ) -> Result<Option<Removal>, SessionError> {
        let Some(mut cart) = self.get(session_id).await? else {
            return Ok(None);
        };
        let removal = cart.remove_items(items);
        self.set(session_id, cart).await?;
        Ok(Some(removal))
    }

    /// Detaches the session's cart: returns it and deletes the entry.
    async fn take(&self, session_id: &SessionId) -> Result<Option<Cart>, SessionError> {
        let cart = self.get(session_id).await?;
        if cart.is_some() {
            self.delete(session_id).await?;
        }
        Ok(cart)
    }
}
