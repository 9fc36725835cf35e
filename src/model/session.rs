/// A conversation's in-progress order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for SessionCart`](#impl-ActorEntity-for-SessionCart) for details on:
/// - Creation parameters (a whole [`Cart`])
/// - Update parameters (a [`Cart`] merged into the existing one)
/// - Custom actions ([`SessionAction`](crate::session_actor::SessionAction))
use crate::model::Cart;
use std::fmt::Display;

/// Opaque identifier the dialogue platform uses to correlate webhook calls
/// of one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionCart {
    pub id: SessionId,
    pub cart: Cart,
}

impl SessionCart {
    pub fn new(id: SessionId, cart: Cart) -> Self {
        Self { id, cart }
    }
}
