//! # Order Webhook
//!
//! Fulfillment webhook for a conversational clothing store. A dialogue
//! platform calls it once per recognised customer intent; the service keeps
//! each conversation's cart in memory between calls and commits it as an
//! order when the customer is done.
//!
//! ## Module Tour
//!
//! ### 1. The Conversation ([`order_session`])
//! The state machine behind `add`, `remove`, `complete` and `track`, plus the
//! commit of a finished cart.
//!
//! ### 2. The Stores ([`store`], [`session_actor`], [`order_store_actor`], [`clients`])
//! [`SessionStore`](store::SessionStore) and [`OrderStore`](store::OrderStore)
//! are what the conversation is written against. The running service backs
//! both with resource actors from `actor_framework`, reached through
//! type-safe clients.
//!
//! ### 3. The Surface ([`webhook`])
//! Platform JSON in, typed intent and session id to the conversation, reply
//! text out.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Configuration, tracing, actor startup and graceful shutdown.
//!
//! ### 5. The Data ([`model`])
//! [`Cart`](model::Cart) and its rendering, the entity types, the price catalog.

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_session;
pub mod order_store_actor;
pub mod session_actor;
pub mod store;
pub mod webhook;
