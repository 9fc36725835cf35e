//! # Actor Framework
//!
//! Building blocks for type-safe, keyed resource actors on Tokio: one task owns
//! a `HashMap` of entities and serves CRUD-style requests plus custom actions
//! over an mpsc channel.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain types and their hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop, one request at a time
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async API
//!
//! ## Keys
//!
//! Entities are keyed either by ids the caller already has (a conversation
//! session id, say) through `insert` / `upsert`, or by ids the actor allocates
//! on `create` when built with [`ResourceActor::with_id_fn`].
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests to one actor are processed **sequentially**, so each request is
//!   atomic with respect to the store
//! - Different actors run in parallel
//! - Hooks should stay short; long I/O belongs in the caller, not in the loop
//!
//! ## Context Injection
//!
//! Dependencies reach hooks through `run(context)` rather than `new()`, so
//! actors can be created first and wired afterwards.
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, which scripts replies for any
//! `ResourceClient<T>`.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
