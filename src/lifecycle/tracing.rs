//! # Observability & Tracing
//!
//! [`setup_tracing`] installs one `tracing-subscriber` for the process:
//! compact lines, no module paths (actors log an `entity_type` field instead),
//! level chosen by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per request and per store change
//! RUST_LOG=debug cargo run     # plus request payloads
//! ```
//!
//! A fulfillment call at `info` reads roughly:
//!
//! ```text
//! INFO Actor started entity_type="SessionCart"
//! INFO Webhook listening addr=127.0.0.1:8000
//! INFO Created entity_type="SessionCart" id=7f3a-99 size=1
//! INFO Deleted entity_type="SessionCart" id=7f3a-99 size=0
//! INFO Created entity_type="PersistedOrder" id=1 size=1
//! INFO Action ok entity_type="PersistedOrder" id=1
//! INFO webhook:handle:commit_cart: Order committed order_id=1
//! INFO webhook:handle: Order placed order_id=1 total=90.0
//! ```
//!
//! Actor lines carry no request span: actors run in their own tasks.
//!
//! When `RUST_LOG` is unset the filter falls back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "order_webhook=info,actor_framework=info";

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line comes from
        .compact()
        .init();
}
