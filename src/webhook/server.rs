//! The HTTP surface: one fulfillment endpoint and a health probe.

use super::params::resolve_intent;
use super::payload::{WebhookRequest, WebhookResponse};
use super::session_id::extract_session_id;
use crate::model::SessionId;
use crate::order_session;
use crate::store::Stores;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, info_span, Instrument};

pub fn router(stores: Stores) -> Router {
    Router::new()
        .route("/", post(fulfill))
        .route("/health", get(health))
        .with_state(stores)
}

/// Answers a fulfillment call. Always 200: every outcome, failures included,
/// is a `fulfillmentText` for the customer.
pub async fn fulfill(
    State(stores): State<Stores>,
    Json(request): Json<WebhookRequest>,
) -> Json<WebhookResponse> {
    let query = request.query_result;
    let session_id = query
        .output_contexts
        .first()
        .map(|context| extract_session_id(&context.name))
        .unwrap_or_else(|| SessionId::from(""));

    let span = info_span!(
        "webhook",
        intent = %query.intent.display_name,
        session = %session_id
    );
    let text = async {
        match resolve_intent(&query.intent.display_name, &query.parameters) {
            Ok(intent) => order_session::handle(intent, &session_id, &stores).await,
            Err(e) => order_session::reply_for(&e),
        }
    }
    .instrument(span)
    .await;

    Json(WebhookResponse::new(text))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status":"ok"}))
}

/// Serves the router on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    stores: Stores,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Webhook listening");
    }
    axum::serve(listener, router(stores))
        .with_graceful_shutdown(shutdown)
        .await
}
