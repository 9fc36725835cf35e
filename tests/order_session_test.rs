use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use order_webhook::clients::{OrderStoreClient, SessionClient};
use order_webhook::lifecycle::OrderSystem;
use order_webhook::model::{Cart, OrderId, PersistedOrder, PriceCatalog, SessionId};
use order_webhook::order_session::{
    handlers, AddRequest, IntentError, RemoveRequest, TrackRequest, BACKEND_MESSAGE,
    MISSING_ORDER_ID_MESSAGE, SESSION_NOT_FOUND_MESSAGE,
};
use order_webhook::order_store_actor::{OrderActionResult, StoreError};
use order_webhook::session_actor;
use order_webhook::store::{OrderStore, SessionStore, Stores};

fn add_request(items: &[(&str, u32)]) -> AddRequest {
    let (names, quantities) = items
        .iter()
        .map(|(item, quantity)| (item.to_string(), *quantity))
        .unzip();
    AddRequest::new(names, quantities).unwrap()
}

fn remove_request(items: &[&str]) -> RemoveRequest {
    RemoveRequest::new(items.iter().map(|item| item.to_string()).collect())
}

fn running_system() -> (OrderSystem, Stores) {
    let system = OrderSystem::with_catalog(32, PriceCatalog::default());
    let stores = system.stores();
    (system, stores)
}

// --- add ---

#[tokio::test]
async fn test_add_overwrites_quantities() {
    let (_system, stores) = running_system();
    let session = SessionId::from("s1");

    handlers::add(add_request(&[("shirt", 2)]), &session, &stores)
        .await
        .unwrap();
    let reply = handlers::add(add_request(&[("shirt", 5)]), &session, &stores)
        .await
        .unwrap();

    assert_eq!(reply, "So far you have: 5 shirt. Do you need anything else?");
    assert_eq!(
        stores.sessions.get(&session).await.unwrap(),
        Some(Cart::from_pairs([("shirt", 5)]))
    );
}

#[tokio::test]
async fn test_add_mismatch_never_reaches_the_store() {
    let (_system, stores) = running_system();
    let session = SessionId::from("s1");

    let request = AddRequest::new(vec!["shirt".into(), "pants".into()], vec![1]);
    let err = request.unwrap_err();
    assert_eq!(
        err.user_message(),
        "Sorry, I didn't understand. Can you please specify dress names and quantities clearly?"
    );
    assert_eq!(stores.sessions.get(&session).await.unwrap(), None);
}

#[tokio::test]
async fn test_concurrent_adds_on_distinct_sessions() {
    let (_system, stores) = running_system();

    let mut tasks = Vec::new();
    for n in 1..=20u32 {
        let stores = stores.clone();
        tasks.push(tokio::spawn(async move {
            let session = SessionId::from(format!("session-{n}"));
            for quantity in 1..=n {
                handlers::add(add_request(&[("shirt", quantity)]), &session, &stores)
                    .await
                    .unwrap();
            }
            handlers::add(add_request(&[("pants", n)]), &session, &stores)
                .await
                .unwrap()
        }));
    }

    for (n, task) in (1..=20u32).zip(tasks) {
        let reply = task.await.unwrap();
        assert_eq!(
            reply,
            format!("So far you have: {n} shirt, {n} pants. Do you need anything else?")
        );
    }
}

#[tokio::test]
async fn test_concurrent_adds_on_one_session_both_land() {
    let (_system, stores) = running_system();
    let session = SessionId::from("shared");

    let items = ["shirt", "pants", "jacket", "dress", "skirt", "hoodie"];
    let mut tasks = Vec::new();
    for item in items {
        let stores = stores.clone();
        let session = session.clone();
        tasks.push(tokio::spawn(async move {
            handlers::add(add_request(&[(item, 1)]), &session, &stores)
                .await
                .unwrap()
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let cart = stores.sessions.get(&session).await.unwrap().unwrap();
    assert_eq!(cart.len(), items.len());
    for item in items {
        assert_eq!(cart.get(item), Some(1));
    }
}

// --- remove ---

#[tokio::test]
async fn test_remove_reports_removed_and_missing() {
    let (_system, stores) = running_system();
    let session = SessionId::from("s1");
    handlers::add(add_request(&[("shirt", 2), ("pants", 1)]), &session, &stores)
        .await
        .unwrap();

    let reply = handlers::remove(remove_request(&["shirt", "hat"]), &session, &stores)
        .await
        .unwrap();

    assert_eq!(
        reply,
        "Removed shirt from your order! Your current order does not have hat \
         Here is what is left in your order: 1 pants"
    );
    assert_eq!(
        stores.sessions.get(&session).await.unwrap(),
        Some(Cart::from_pairs([("pants", 1)]))
    );
}

#[tokio::test]
async fn test_remove_everything_keeps_empty_session() {
    let (_system, stores) = running_system();
    let session = SessionId::from("s1");
    handlers::add(add_request(&[("shirt", 2)]), &session, &stores)
        .await
        .unwrap();

    let reply = handlers::remove(remove_request(&["shirt"]), &session, &stores)
        .await
        .unwrap();

    assert_eq!(reply, "Removed shirt from your order! Your order is empty!");
    assert_eq!(stores.sessions.get(&session).await.unwrap(), Some(Cart::new()));
}

#[tokio::test]
async fn test_remove_on_unknown_session() {
    let (_system, stores) = running_system();
    let session = SessionId::from("nobody");

    let result = handlers::remove(remove_request(&["shirt"]), &session, &stores).await;

    assert_eq!(result, Err(IntentError::SessionNotFound(session.clone())));
    assert_eq!(
        result.unwrap_err().user_message(),
        SESSION_NOT_FOUND_MESSAGE
    );
    assert_eq!(stores.sessions.get(&session).await.unwrap(), None);
}

// --- complete ---

#[tokio::test]
async fn test_complete_on_unknown_session() {
    let (_system, stores) = running_system();

    let result = handlers::complete(&SessionId::from("nobody"), &stores).await;

    assert!(matches!(result, Err(IntentError::SessionNotFound(_))));
}

#[tokio::test]
async fn test_complete_success_reports_id_and_total() {
    let (_system, stores) = running_system();
    let session = SessionId::from("s1");
    handlers::add(add_request(&[("t-shirt", 3)]), &session, &stores)
        .await
        .unwrap();

    let reply = handlers::complete(&session, &stores).await.unwrap();

    assert_eq!(
        reply,
        "Awesome. We have placed your order. Here is your order id # 1. \
         Your order total is 45.00. You can pay at the time of delivery!"
    );
    assert_eq!(stores.sessions.get(&session).await.unwrap(), None);
    assert_eq!(
        stores.orders.order_status(OrderId(1)).await.unwrap(),
        Some("in progress".to_string())
    );
}

#[tokio::test]
async fn test_complete_after_removing_everything_places_empty_order() {
    let (_system, stores) = running_system();
    let session = SessionId::from("s1");
    handlers::add(add_request(&[("shirt", 2)]), &session, &stores)
        .await
        .unwrap();
    handlers::remove(remove_request(&["shirt"]), &session, &stores)
        .await
        .unwrap();

    let reply = handlers::complete(&session, &stores).await.unwrap();

    assert_eq!(
        reply,
        "Awesome. We have placed your order. Here is your order id # 1. \
         Your order total is 0.00. You can pay at the time of delivery!"
    );
    assert_eq!(stores.sessions.get(&session).await.unwrap(), None);
    assert_eq!(stores.orders.total_order_price(OrderId(1)).await.unwrap(), 0.0);
}

/// Real session actor, mocked order store: the second item row is rejected.
#[tokio::test]
async fn test_complete_failure_stops_at_failing_row_and_drops_cart() {
    let system = OrderSystem::with_catalog(32, PriceCatalog::default());

    let mut orders = MockClient::<PersistedOrder>::new();
    orders.expect_create().return_ok(OrderId(7));
    orders
        .expect_action(OrderId(7))
        .return_ok(OrderActionResult::AddLine(()));
    orders
        .expect_action(OrderId(7))
        .return_err(FrameworkError::entity(StoreError::UnknownItem("cape".into())));
    // No tracking row and no third item row may follow

    let stores = Stores::new(
        system.session_client.clone(),
        OrderStoreClient::new(orders.client()),
    );
    let session = SessionId::from("s1");
    handlers::add(
        add_request(&[("shirt", 1), ("cape", 1), ("pants", 1)]),
        &session,
        &stores,
    )
    .await
    .unwrap();

    let result = handlers::complete(&session, &stores).await;

    assert_eq!(
        result,
        Err(IntentError::StoreWriteFailure(StoreError::UnknownItem(
            "cape".into()
        )))
    );
    assert_eq!(result.unwrap_err().user_message(), BACKEND_MESSAGE);
    assert_eq!(stores.sessions.get(&session).await.unwrap(), None);
    orders.verify();
}

#[tokio::test]
async fn test_complete_tracking_failure_is_not_reported() {
    let system = OrderSystem::with_catalog(32, PriceCatalog::default());

    let mut orders = MockClient::<PersistedOrder>::new();
    orders.expect_create().return_ok(OrderId(3));
    orders
        .expect_action(OrderId(3))
        .return_ok(OrderActionResult::AddLine(()));
    orders
        .expect_update(OrderId(3))
        .return_err(FrameworkError::ActorClosed);
    orders
        .expect_action(OrderId(3))
        .return_ok(OrderActionResult::Total(25.0));

    let stores = Stores::new(
        system.session_client.clone(),
        OrderStoreClient::new(orders.client()),
    );
    let session = SessionId::from("s1");
    handlers::add(add_request(&[("shirt", 1)]), &session, &stores)
        .await
        .unwrap();

    let reply = handlers::complete(&session, &stores).await.unwrap();

    assert!(reply.contains("order id # 3."), "unexpected reply: {reply}");
    assert!(reply.contains("Your order total is 25.00."));
    orders.verify();
}

// --- track ---

#[tokio::test]
async fn test_track_without_id_does_not_query() {
    let system = OrderSystem::with_catalog(32, PriceCatalog::default());
    // A mock with no expectations: any store request would fail the call
    let orders = MockClient::<PersistedOrder>::new();
    let stores = Stores::new(
        system.session_client.clone(),
        OrderStoreClient::new(orders.client()),
    );

    let result = handlers::track(TrackRequest::new(None), &stores).await;

    assert_eq!(result, Err(IntentError::MissingOrderId));
    assert_eq!(result.unwrap_err().user_message(), MISSING_ORDER_ID_MESSAGE);
    orders.verify();
}

#[tokio::test]
async fn test_track_known_and_unknown_orders() {
    let (_system, stores) = running_system();
    let session = SessionId::from("s1");
    handlers::add(add_request(&[("jeans", 1)]), &session, &stores)
        .await
        .unwrap();
    handlers::complete(&session, &stores).await.unwrap();

    let reply = handlers::track(TrackRequest::new(Some(OrderId(1))), &stores)
        .await
        .unwrap();
    assert_eq!(reply, "The order status for order id: 1 is: in progress");

    let result = handlers::track(TrackRequest::new(Some(OrderId(42))), &stores).await;
    assert_eq!(result, Err(IntentError::OrderNotFound(OrderId(42))));
    assert_eq!(
        result.unwrap_err().user_message(),
        "No order found with order id: 42"
    );
}

#[tokio::test]
async fn test_track_never_touches_sessions() {
    let (_system, stores) = running_system();
    let session = SessionId::from("s1");
    handlers::add(add_request(&[("shirt", 2)]), &session, &stores)
        .await
        .unwrap();

    handlers::track(TrackRequest::new(Some(OrderId(1))), &stores)
        .await
        .unwrap_err();

    assert_eq!(
        stores.sessions.get(&session).await.unwrap(),
        Some(Cart::from_pairs([("shirt", 2)]))
    );
}

#[tokio::test]
async fn test_closed_session_store_is_a_backend_error() {
    let system = OrderSystem::with_catalog(32, PriceCatalog::default());
    let (session_actor, session_client) = session_actor::new(4);
    drop(session_actor);

    let stores = Stores::new(
        SessionClient::new(session_client),
        system.order_store_client.clone(),
    );
    let result = handlers::add(add_request(&[("shirt", 1)]), &SessionId::from("s1"), &stores).await;

    assert!(matches!(result, Err(IntentError::Backend(_))));
    assert_eq!(result.unwrap_err().user_message(), BACKEND_MESSAGE);
}
