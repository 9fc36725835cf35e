//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors behind the webhook.
//!
//! ## The OrderSystem Pattern
//!
//! [`OrderSystem`] creates each actor with its client, then starts it with its
//! context injected through `run(context)`:
//!
//! ```rust,ignore
//! let (session_actor, session_client) = session_actor::new(buffer_size);
//! let (order_store_actor, order_store_client) = order_store_actor::new(buffer_size);
//!
//! tokio::spawn(session_actor.run(()));
//! tokio::spawn(order_store_actor.run(Arc::new(catalog)));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop serving** - the HTTP server finishes in-flight calls and drops its [`Stores`](crate::store::Stores)
//! 2. **Drop all clients** - [`OrderSystem::shutdown`] closes the sender side of both channels
//! 3. **Actors detect closure** - `receiver.recv()` returns `None` and the loop logs its final size
//! 4. **Await completion** - both actor tasks are joined
//!
//! In-progress carts are discarded on shutdown.
//!
//! ## Configuration & Observability
//!
//! [`AppConfig`] reads flags and environment variables; [`setup_tracing`]
//! installs the log subscriber. See the [`config`] and [`tracing`](self::tracing) modules.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use config::*;
pub use order_system::*;
pub use self::tracing::*;
