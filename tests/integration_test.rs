use order_webhook::lifecycle::OrderSystem;
use order_webhook::model::{Cart, OrderId, PriceCatalog, SessionId};
use order_webhook::order_session::{self, AddRequest, Intent, RemoveRequest, TrackRequest};
use order_webhook::store::SessionStore;

fn add(items: &[(&str, u32)]) -> Intent {
    let (names, quantities) = items
        .iter()
        .map(|(item, quantity)| (item.to_string(), *quantity))
        .unzip();
    Intent::Add(AddRequest::new(names, quantities).expect("lengths match"))
}

/// Full end-to-end conversation with all real actors.
#[tokio::test]
async fn test_full_conversation_integration() {
    let system = OrderSystem::with_catalog(32, PriceCatalog::default());
    let stores = system.stores();
    let session = SessionId::from("7f3a-99");

    // Build up a cart over several calls
    let reply = order_session::handle(add(&[("shirt", 2), ("pants", 1)]), &session, &stores).await;
    assert_eq!(
        reply,
        "So far you have: 2 shirt, 1 pants. Do you need anything else?"
    );

    let reply = order_session::handle(add(&[("jacket", 1), ("shirt", 3)]), &session, &stores).await;
    assert_eq!(
        reply,
        "So far you have: 3 shirt, 1 pants, 1 jacket. Do you need anything else?"
    );

    // Change of mind
    let remove = Intent::Remove(RemoveRequest::new(vec!["pants".into(), "hat".into()]));
    let reply = order_session::handle(remove, &session, &stores).await;
    assert_eq!(
        reply,
        "Removed pants from your order! Your current order does not have hat \
         Here is what is left in your order: 3 shirt, 1 jacket"
    );

    // Commit: 3 × 25.0 + 1 × 80.0
    let reply = order_session::handle(Intent::Complete, &session, &stores).await;
    assert_eq!(
        reply,
        "Awesome. We have placed your order. Here is your order id # 1. \
         Your order total is 155.00. You can pay at the time of delivery!"
    );
    assert_eq!(
        system
            .session_client
            .get(&session)
            .await
            .expect("Failed to read session"),
        None
    );

    // Track it from a different conversation
    let track = Intent::Track(TrackRequest::new(Some(OrderId(1))));
    let reply = order_session::handle(track, &SessionId::from("other"), &stores).await;
    assert_eq!(reply, "The order status for order id: 1 is: in progress");

    // Shutdown once nothing else holds a client
    drop(stores);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_order_ids_increase_across_sessions() {
    let system = OrderSystem::with_catalog(32, PriceCatalog::default());
    let stores = system.stores();

    for (index, session) in ["a", "b", "c"].into_iter().enumerate() {
        let session = SessionId::from(session);
        order_session::handle(add(&[("dress", 1)]), &session, &stores).await;
        let reply = order_session::handle(Intent::Complete, &session, &stores).await;
        assert!(
            reply.contains(&format!("order id # {}.", index + 1)),
            "unexpected reply: {reply}"
        );
        assert!(reply.contains("Your order total is 60.00."));
    }

    // Carts are gone, orders stay
    let reply = order_session::handle(Intent::Complete, &SessionId::from("a"), &stores).await;
    assert_eq!(
        reply,
        "I'm having trouble finding your order. Sorry! Can you place a new order please?"
    );
    let reply = order_session::handle(
        Intent::Track(TrackRequest::new(Some(OrderId(3)))),
        &SessionId::from("a"),
        &stores,
    )
    .await;
    assert_eq!(reply, "The order status for order id: 3 is: in progress");
}

#[tokio::test]
async fn test_unpriced_item_fails_commit_and_discards_cart() {
    let system = OrderSystem::with_catalog(32, PriceCatalog::default());
    let stores = system.stores();
    let session = SessionId::from("s1");

    // "cape" is accepted into the cart, but the store has no price for it
    order_session::handle(add(&[("shirt", 1), ("cape", 1)]), &session, &stores).await;
    let reply = order_session::handle(Intent::Complete, &session, &stores).await;
    assert_eq!(
        reply,
        "Sorry, I couldn't process your order due to a backend error. Please place a new order again."
    );

    // The cart is gone; the half-written order keeps its shirt row but has no tracking row
    assert_eq!(system.session_client.get(&session).await.unwrap(), None);
    let reply = order_session::handle(
        Intent::Track(TrackRequest::new(Some(OrderId(1)))),
        &session,
        &stores,
    )
    .await;
    assert_eq!(reply, "No order found with order id: 1");

    // Starting again works
    let reply = order_session::handle(add(&[("shirt", 1)]), &session, &stores).await;
    assert_eq!(reply, "So far you have: 1 shirt. Do you need anything else?");
    assert_eq!(
        system.session_client.get(&session).await.unwrap(),
        Some(Cart::from_pairs([("shirt", 1)]))
    );
}
