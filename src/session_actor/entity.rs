//! Entity trait implementation for [`SessionCart`].
//!
//! `Update` carries a partial cart that is merged per item into the stored one,
//! and [`from_update`](ActorEntity::from_update) lets an upsert start a cart for
//! a session seen for the first time.

use super::actions::{SessionAction, SessionActionResult};
use super::error::SessionError;
use crate::model::{Cart, SessionCart, SessionId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for SessionCart {
    type Id = SessionId;
    type Create = Cart;
    type Update = Cart;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Context = ();
    type Error = SessionError;

    fn from_create_params(id: SessionId, cart: Cart) -> Result<Self, Self::Error> {
        Ok(Self::new(id, cart))
    }

    fn from_update(id: SessionId, cart: Cart) -> Option<Self> {
        Some(Self::new(id, cart))
    }

    /// Overwrites the quantities of the items in `update` and adds the new ones.
    async fn on_update(&mut self, update: Cart, _ctx: &()) -> Result<(), Self::Error> {
        self.cart.merge(update);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        _ctx: &(),
    ) -> Result<SessionActionResult, Self::Error> {
        match action {
            SessionAction::RemoveItems(items) => Ok(SessionActionResult::RemoveItems(
                self.cart.remove_items(&items),
            )),
        }
    }
}
