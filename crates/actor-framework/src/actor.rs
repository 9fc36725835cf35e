//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a keyed
//! store of entities and processes requests against it one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type IdFn<Id> = Box<dyn FnMut() -> Id + Send>;

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half of the actor. It owns the `store` and the
/// receiving end of the channel, and handles each message to completion before
/// reading the next one. No `Mutex` guards the store: the task owns it.
///
/// # Usage Pattern
///
/// 1. **Create**: call [`ResourceActor::new`] (caller-supplied ids) or
///    [`ResourceActor::with_id_fn`] (actor-allocated ids) to get the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { hits: u32 }
/// #[derive(Debug)] struct CounterCreate;
/// #[derive(Debug)] struct Hit;
/// #[derive(Debug)] enum CounterAction {}
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = String;
///     type Create = CounterCreate;
///     type Update = Hit;
///     type Action = CounterAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CounterError;
///
///     fn from_create_params(_: String, _: CounterCreate) -> Result<Self, Self::Error> {
///         Ok(Self { hits: 0 })
///     }
///     fn from_update(_: String, _: Hit) -> Option<Self> {
///         Some(Self { hits: 1 })
///     }
///     async fn on_update(&mut self, _: Hit, _: &()) -> Result<(), Self::Error> {
///         self.hits += 1;
///         Ok(())
///     }
///     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<(), Self::Error> {
///         match action {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.upsert("page".to_string(), Hit).await.unwrap();
///     let counter = client.upsert("page".to_string(), Hit).await.unwrap();
///     assert_eq!(counter.hits, 2);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: Option<IdFn<T::Id>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor whose entities are keyed by caller-supplied ids.
    ///
    /// `Create` requests are refused with [`FrameworkError::IdAllocationUnsupported`];
    /// use `insert` or `upsert` instead.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, None)
    }

    /// Creates an actor that allocates ids itself by calling `next_id` on every `Create`.
    pub fn with_id_fn(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, Some(Box::new(next_id)))
    }

    fn build(buffer_size: usize, next_id: Option<IdFn<T::Id>>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "SessionCart" rather than "order_webhook::model::session::SessionCart"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(next_id) = self.next_id.as_mut() else {
                        warn!(entity_type, "Create without id allocator");
                        let _ = respond_to.send(Err(FrameworkError::IdAllocationUnsupported));
                        continue;
                    };
                    let id = next_id();
                    let result = self.store_new(id.clone(), params, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result.map(|()| id));
                }
                ResourceRequest::Insert {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Insert");
                    let replaced = self.store.contains_key(&id);
                    let result = self.store_new(id.clone(), params, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, replaced, size = self.store.len(), "Inserted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Insert failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Upsert {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Upsert");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Upsert failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else if let Some(mut item) = T::from_update(id.clone(), update) {
                        if let Err(e) = item.on_create(&context).await {
                            warn!(entity_type, %id, error = %e, "on_create failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                            continue;
                        }
                        self.store.insert(id.clone(), item.clone());
                        info!(entity_type, %id, size = self.store.len(), "Created");
                        let _ = respond_to.send(Ok(item));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        debug!(entity_type, %id, "Nothing to delete");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    let removed = self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::entity);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn store_new(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<(), FrameworkError> {
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::entity)?;
        item.on_create(context).await.map_err(FrameworkError::entity)?;
        self.store.insert(id, item);
        Ok(())
    }
}
