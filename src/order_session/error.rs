//! Outcome kinds of the order session that are not a plain success.
//!
//! None of them is a transport failure: every variant turns into the text the
//! customer reads via [`IntentError::user_message`].

use crate::model::{OrderId, SessionId};
use crate::order_store_actor::StoreError;
use crate::session_actor::SessionError;
use thiserror::Error;

pub const MISMATCH_MESSAGE: &str =
    "Sorry, I didn't understand. Can you please specify dress names and quantities clearly?";
pub const SESSION_NOT_FOUND_MESSAGE: &str =
    "I'm having trouble finding your order. Sorry! Can you place a new order please?";
pub const BACKEND_MESSAGE: &str =
    "Sorry, I couldn't process your order due to a backend error. Please place a new order again.";
pub const MISSING_ORDER_ID_MESSAGE: &str = "No order id provided. Please provide an order id.";
pub const UNKNOWN_INTENT_MESSAGE: &str = "Sorry, I can't help with that yet.";
pub const INVALID_PARAMETERS_MESSAGE: &str = "Sorry, I didn't understand that. Can you say it again?";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntentError {
    /// Item names and quantities came in lists of different lengths.
    #[error("Got {items} items but {quantities} quantities")]
    ParameterMismatch { items: usize, quantities: usize },

    #[error("No order in progress for session {0}")]
    SessionNotFound(SessionId),

    /// An item row could not be written while committing.
    #[error("Order commit failed: {0}")]
    StoreWriteFailure(StoreError),

    #[error("No order found with id {0}")]
    OrderNotFound(OrderId),

    #[error("No order id provided")]
    MissingOrderId,

    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameters { name: String, reason: String },

    /// The session or order store could not be reached or answered unexpectedly.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl IntentError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        IntentError::InvalidParameters {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// The text shown to the customer.
    pub fn user_message(&self) -> String {
        match self {
            IntentError::ParameterMismatch { .. } => MISMATCH_MESSAGE.to_string(),
            IntentError::SessionNotFound(_) => SESSION_NOT_FOUND_MESSAGE.to_string(),
            IntentError::StoreWriteFailure(_) | IntentError::Backend(_) => {
                BACKEND_MESSAGE.to_string()
            }
            IntentError::OrderNotFound(id) => format!("No order found with order id: {id}"),
            IntentError::MissingOrderId => MISSING_ORDER_ID_MESSAGE.to_string(),
            IntentError::UnknownIntent(_) => UNKNOWN_INTENT_MESSAGE.to_string(),
            IntentError::InvalidParameters { .. } => INVALID_PARAMETERS_MESSAGE.to_string(),
        }
    }

    /// Whether the failure lies with our stores rather than with the request.
    pub fn is_backend(&self) -> bool {
        matches!(
            self,
            IntentError::StoreWriteFailure(_) | IntentError::Backend(_)
        )
    }
}

impl From<SessionError> for IntentError {
    fn from(e: SessionError) -> Self {
        IntentError::Backend(e.to_string())
    }
}
