//! # Generic Messages
//!
//! The request enum exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Every variant is handled to completion before the next message is read, so
/// each request is atomic with respect to the entity it targets.
///
/// - **Create**: store a new entity under an id produced by the actor.
/// - **Insert**: store an entity under a caller-supplied id, replacing any previous one.
/// - **Get**: fetch a clone of the entity.
/// - **Update**: mutate an existing entity via [`ActorEntity::on_update`].
/// - **Upsert**: like `Update`, but builds the entity with [`ActorEntity::from_update`] when absent.
/// - **Delete**: remove the entity and hand it back; absent ids answer `None`.
/// - **Action**: run a custom [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Insert {
        id: T::Id,
        params: T::Create,
        respond_to: Response<()>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Upsert {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
