//! # Order Session
//!
//! The conversation-level state machine: it tracks a customer's cart across
//! independent webhook calls that share only a [`SessionId`], and turns every
//! call into the sentence the customer reads next.
//!
//! ## Structure
//!
//! - [`request`] - typed requests, validated before any store is touched
//! - [`handlers`] - `add`, `remove`, `complete` and `track`
//! - [`commit`] - writes a finished cart to the [`OrderStore`](crate::store::OrderStore)
//! - [`error`] - [`IntentError`], each kind with its customer-facing text
//!
//! ## Session lifecycle
//!
//! ```text
//! absent --add--> active --add/remove--> active --complete--> absent
//! ```
//!
//! `remove` and `complete` on an absent session answer with the "can't find
//! your order" message and change nothing.

pub mod commit;
pub mod error;
pub mod handlers;
pub mod request;

pub use error::*;
pub use request::*;

use crate::model::SessionId;
use crate::store::Stores;
use tracing::{error, info, instrument};

/// A customer action, resolved once from the platform's intent name.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Add(AddRequest),
    Remove(RemoveRequest),
    Complete,
    Track(TrackRequest),
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Add(_) => "add",
            Intent::Remove(_) => "remove",
            Intent::Complete => "complete",
            Intent::Track(_) => "track",
        }
    }
}

/// Runs `intent` for the session and returns the reply text. Failures become
/// their customer-facing message here; nothing is propagated.
#[instrument(skip(intent, stores), fields(intent = intent.name(), session = %session_id))]
pub async fn handle(intent: Intent, session_id: &SessionId, stores: &Stores) -> String {
    let outcome = match intent {
        Intent::Add(request) => handlers::add(request, session_id, stores).await,
        Intent::Remove(request) => handlers::remove(request, session_id, stores).await,
        Intent::Complete => handlers::complete(session_id, stores).await,
        Intent::Track(request) => handlers::track(request, stores).await,
    };
    outcome.unwrap_or_else(|e| reply_for(&e))
}

/// Logs `e` and returns the text to send instead of a result.
pub fn reply_for(e: &IntentError) -> String {
    if e.is_backend() {
        error!(error = %e, "Request failed");
    } else {
        info!(outcome = %e, "Request not fulfilled");
    }
    e.user_message()
}
