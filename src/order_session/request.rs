//! Typed requests of the four order session operations.
//!
//! The dialogue platform sends numbers as JSON floats; the conversions here
//! decide what counts as a usable quantity or order id.

use super::error::IntentError;
use crate::model::{Cart, OrderId};

/// Items to put in the cart, zipped with their quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct AddRequest {
    items: Vec<String>,
    quantities: Vec<u32>,
}

impl AddRequest {
    /// Fails with [`IntentError::ParameterMismatch`] when the lists differ in length.
    pub fn new(items: Vec<String>, quantities: Vec<u32>) -> Result<Self, IntentError> {
        if items.len() != quantities.len() {
            return Err(IntentError::ParameterMismatch {
                items: items.len(),
                quantities: quantities.len(),
            });
        }
        Ok(Self { items, quantities })
    }

    /// The requested items as a cart; a repeated name keeps its last quantity.
    pub fn into_cart(self) -> Cart {
        Cart::from_pairs(self.items.into_iter().zip(self.quantities))
    }
}

/// Items to take out of the cart.
///
/// An unreadable item list is kept as its error: a remove on an unknown
/// session answers with the session error before the list is looked at.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveRequest {
    items: Result<Vec<String>, IntentError>,
}

impl RemoveRequest {
    pub fn new(items: Vec<String>) -> Self {
        Self { items: Ok(items) }
    }

    pub fn unreadable(error: IntentError) -> Self {
        Self { items: Err(error) }
    }

    pub fn items(&self) -> Result<&[String], &IntentError> {
        self.items.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackRequest {
    /// `None` when the customer gave no id (the platform sends `0`).
    pub order_id: Option<OrderId>,
}

impl TrackRequest {
    pub fn new(order_id: Option<OrderId>) -> Self {
        Self { order_id }
    }

    /// Truncates towards zero; `0` means no id was given.
    pub fn from_number(number: f64) -> Result<Self, IntentError> {
        let id = whole_number(number)?;
        if id == 0 {
            return Ok(Self::new(None));
        }
        Ok(Self::new(Some(OrderId(id))))
    }
}

/// Truncates a platform-supplied quantity towards zero.
pub fn quantity_from_number(number: f64) -> Result<u32, IntentError> {
    whole_number(number)
}

fn whole_number(number: f64) -> Result<u32, IntentError> {
    if !number.is_finite() {
        return Err(IntentError::invalid("number", format!("{number} is not a number")));
    }
    let whole = number.trunc();
    if whole < 0.0 || whole > f64::from(u32::MAX) {
        return Err(IntentError::invalid("number", format!("{number} is out of range")));
    }
    Ok(whole as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_rejects_mismatched_lengths() {
        let result = AddRequest::new(vec!["shirt".into(), "pants".into()], vec![2]);
        assert_eq!(
            result,
            Err(IntentError::ParameterMismatch {
                items: 2,
                quantities: 1
            })
        );
    }

    #[test]
    fn test_add_request_last_quantity_wins() {
        let request =
            AddRequest::new(vec!["shirt".into(), "shirt".into()], vec![1, 3]).unwrap();
        assert_eq!(request.into_cart(), Cart::from_pairs([("shirt", 3)]));
    }

    #[test]
    fn test_numbers_are_truncated() {
        assert_eq!(quantity_from_number(2.0), Ok(2));
        assert_eq!(quantity_from_number(2.9), Ok(2));
        assert!(quantity_from_number(-1.0).is_err());
        assert!(quantity_from_number(f64::NAN).is_err());
    }

    #[test]
    fn test_track_request_from_number() {
        assert_eq!(TrackRequest::from_number(0.0), Ok(TrackRequest::new(None)));
        assert_eq!(
            TrackRequest::from_number(41.0),
            Ok(TrackRequest::new(Some(OrderId(41))))
        );
        assert!(TrackRequest::from_number(-3.0).is_err());
        assert!(TrackRequest::from_number(1e12).is_err());
    }
}
