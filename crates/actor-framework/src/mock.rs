//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of expectations instead of by an actor. Use it to
//! test logic *around* a client, especially failure paths that are awkward to
//! provoke with real state.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted replies | Real state |
//! | **Error injection** | `return_err` | Requires specific state |
//! | **Use case** | Code that calls a client | The entity and actor themselves |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Ticket { id: u32 }
//! #[derive(Debug)] struct TicketCreate;
//! #[derive(Debug)] struct TicketUpdate;
//! #[derive(Debug)] enum TicketAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct TicketError;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32; type Create = TicketCreate; type Update = TicketUpdate;
//!     type Action = TicketAction; type ActionResult = (); type Context = (); type Error = TicketError;
//!     fn from_create_params(id: u32, _: TicketCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: TicketUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: TicketAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Ticket>::new();
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For step-by-step control, [`create_mock_client`] returns the raw receiver and
//! the `expect_*` helpers pull the next request off it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, tagged with the request kind (and id) it must answer.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Insert {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Upsert {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (wrong kind or wrong id) panics the mock task, which the caller
/// observes as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `insert` operation for `id`.
    pub fn expect_insert(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Insert { id, response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects an `upsert` operation for `id`.
    pub fn expect_upsert(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Upsert { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Insert { id, respond_to, .. },
            Some(Expectation::Insert { id: expected, response }),
        ) => reply(id, expected, respond_to, response),
        (
            ResourceRequest::Get { id, respond_to },
            Some(Expectation::Get { id: expected, response }),
        ) => reply(id, expected, respond_to, response),
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: expected, response }),
        ) => reply(id, expected, respond_to, response),
        (
            ResourceRequest::Upsert { id, respond_to, .. },
            Some(Expectation::Upsert { id: expected, response }),
        ) => reply(id, expected, respond_to, response),
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: expected, response }),
        ) => reply(id, expected, respond_to, response),
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: expected, response }),
        ) => reply(id, expected, respond_to, response),
        _ => {
            panic!("Unexpected request or expectation mismatch");
        }
    }
}

fn reply<I, R>(
    id: I,
    expected: I,
    respond_to: oneshot::Sender<Result<R, FrameworkError>>,
    response: Result<R, FrameworkError>,
) where
    I: PartialEq + std::fmt::Debug,
{
    assert_eq!(id, expected, "request sent to an unexpected id");
    let _ = respond_to.send(response);
}

/// Queues the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client wired to a receiver the test controls directly.
///
/// Pair it with [`expect_create`], [`expect_get`], [`expect_delete`] or
/// [`expect_action`] to inspect each request and answer it by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Seat {
        row: u32,
        taken: bool,
    }

    #[derive(Debug)]
    struct SeatCreate {
        row: u32,
    }

    #[derive(Debug)]
    struct SeatUpdate;

    #[derive(Debug)]
    enum SeatAction {
        Take,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Seat error")]
    struct SeatError;

    #[async_trait]
    impl ActorEntity for Seat {
        type Id = u32;
        type Create = SeatCreate;
        type Update = SeatUpdate;
        type Action = SeatAction;
        type ActionResult = bool;
        type Context = ();
        type Error = SeatError;

        fn from_create_params(_id: u32, params: SeatCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                row: params.row,
                taken: false,
            })
        }

        async fn on_update(&mut self, _update: SeatUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, action: SeatAction, _ctx: &()) -> Result<bool, Self::Error> {
            match action {
                SeatAction::Take => Ok(!std::mem::replace(&mut self.taken, true)),
            }
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Seat>(10);

        let create_task = tokio::spawn(async move { client.create(SeatCreate { row: 4 }).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.row, 4);
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_channel_helpers_answer_by_hand() {
        let (client, mut receiver) = create_mock_client::<Seat>(10);

        let calls = tokio::spawn(async move {
            let fetched = client.get(7).await;
            let taken = client.perform_action(7, SeatAction::Take).await;
            let removed = client.delete(7).await;
            (fetched, taken, removed)
        });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 7);
        responder
            .send(Ok(Some(Seat { row: 2, taken: false })))
            .unwrap();

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 7);
        assert!(matches!(action, SeatAction::Take));
        responder.send(Err(FrameworkError::NotFound("7".into()))).unwrap();

        let (id, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, 7);
        responder.send(Ok(None)).unwrap();

        let (fetched, taken, removed) = calls.await.unwrap();
        assert_eq!(fetched.unwrap(), Some(Seat { row: 2, taken: false }));
        assert!(matches!(taken, Err(FrameworkError::NotFound(id)) if id == "7"));
        assert!(removed.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Seat>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Seat { row: 4, taken: false }));
        mock.expect_action(1).return_ok(true);
        mock.expect_delete(1).return_ok(None);

        let client = mock.client();

        assert_eq!(client.create(SeatCreate { row: 4 }).await.unwrap(), 1);
        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.map(|seat| seat.row), Some(4));
        assert!(client.perform_action(1, SeatAction::Take).await.unwrap());
        assert!(client.delete(1).await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_rejects_wrong_id() {
        let mut mock = MockClient::<Seat>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<Seat>::new();
        mock.expect_upsert(3)
            .return_err(FrameworkError::NotFound("3".to_string()));

        let result = mock.client().upsert(3, SeatUpdate).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "3"));
        mock.verify();
    }
}
