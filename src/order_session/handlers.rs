//! The four operations of an order session.
//!
//! A session has no entry until the first `add`, keeps it through any number
//! of adds and removes (also when the cart becomes empty), and loses it on
//! `complete` whatever the commit outcome.

use super::commit::commit_cart;
use super::error::IntentError;
use super::request::{AddRequest, RemoveRequest, TrackRequest};
use crate::model::{Removal, SessionId};
use crate::store::Stores;
use tracing::{debug, info};

/// Merges the requested items into the session's cart and lists the whole cart.
pub async fn add(
    request: AddRequest,
    session_id: &SessionId,
    stores: &Stores,
) -> Result<String, IntentError> {
    let items = request.into_cart();
    debug!(%items, "Adding to cart");
    let cart = stores.sessions.merge(session_id, items).await?;
    Ok(format!(
        "So far you have: {cart}. Do you need anything else?"
    ))
}

pub async fn remove(
    request: RemoveRequest,
    session_id: &SessionId,
    stores: &Stores,
) -> Result<String, IntentError> {
    let items = match request.items() {
        Ok(items) => items,
        Err(e) => {
            if stores.sessions.get(session_id).await?.is_none() {
                return Err(IntentError::SessionNotFound(session_id.clone()));
            }
            return Err(e.clone());
        }
    };
    let removal = stores
        .sessions
        .remove_items(session_id, items)
        .await?
        .ok_or_else(|| IntentError::SessionNotFound(session_id.clone()))?;
    Ok(removal_message(&removal))
}

/// Commits the session's cart and reports the new order id and total.
///
/// The entry is detached before the commit starts, so it is gone afterwards
/// even when the commit fails.
pub async fn complete(session_id: &SessionId, stores: &Stores) -> Result<String, IntentError> {
    let cart = stores
        .sessions
        .take(session_id)
        .await?
        .ok_or_else(|| IntentError::SessionNotFound(session_id.clone()))?;

    let order_id = commit_cart(stores.orders.as_ref(), &cart)
        .await
        .map_err(IntentError::StoreWriteFailure)?;
    let total = stores
        .orders
        .total_order_price(order_id)
        .await
        .map_err(|e| IntentError::Backend(e.to_string()))?;

    info!(%order_id, total, "Order placed");
    Ok(format!(
        "Awesome. We have placed your order. Here is your order id # {order_id}. \
         Your order total is {total:.2}. You can pay at the time of delivery!"
    ))
}

/// Looks up an order's tracking status. Never touches the session store.
pub async fn track(request: TrackRequest, stores: &Stores) -> Result<String, IntentError> {
    let order_id = request.order_id.ok_or(IntentError::MissingOrderId)?;
    match stores.orders.order_status(order_id).await {
        Ok(Some(status)) => Ok(format!(
            "The order status for order id: {order_id} is: {status}"
        )),
        Ok(None) => Err(IntentError::OrderNotFound(order_id)),
        Err(e) => Err(IntentError::Backend(e.to_string())),
    }
}

fn removal_message(removal: &Removal) -> String {
    let mut message = String::new();
    if !removal.removed.is_empty() {
        message.push_str(&format!(
            "Removed {} from your order!",
            removal.removed.join(", ")
        ));
    }
    if !removal.not_found.is_empty() {
        message.push_str(&format!(
            " Your current order does not have {}",
            removal.not_found.join(", ")
        ));
    }
    if removal.remaining.is_empty() {
        message.push_str(" Your order is empty!");
    } else {
        message.push_str(&format!(
            " Here is what is left in your order: {}",
            removal.remaining
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cart;

    fn removal(removed: &[&str], not_found: &[&str], remaining: Cart) -> Removal {
        Removal {
            removed: removed.iter().map(|s| s.to_string()).collect(),
            not_found: not_found.iter().map(|s| s.to_string()).collect(),
            remaining,
        }
    }

    #[test]
    fn test_removal_message_clauses() {
        let partial = removal(&["shirt"], &["hat"], Cart::from_pairs([("pants", 1)]));
        assert_eq!(
            removal_message(&partial),
            "Removed shirt from your order! Your current order does not have hat \
             Here is what is left in your order: 1 pants"
        );

        let emptied = removal(&["shirt", "pants"], &[], Cart::new());
        assert_eq!(
            removal_message(&emptied),
            "Removed shirt, pants from your order! Your order is empty!"
        );

        let nothing = removal(&[], &["hat"], Cart::from_pairs([("shirt", 2)]));
        assert_eq!(
            removal_message(&nothing),
            " Your current order does not have hat Here is what is left in your order: 2 shirt"
        );
    }
}
