//! Turns an intent name plus untyped platform parameters into an [`Intent`].

use crate::order_session::{
    quantity_from_number, AddRequest, Intent, IntentError, RemoveRequest, TrackRequest,
};
use serde_json::{Map, Value};

pub const ADD_INTENT: &str = "order.add - context: ongoing-order";
pub const REMOVE_INTENT: &str = "order.remove - context: ongoing-order";
pub const COMPLETE_INTENT: &str = "order.complete - context: ongoing-order";
pub const TRACK_INTENT: &str = "track.order - context: ongoing-order";

/// Resolves the platform's intent display name and validates its parameters.
///
/// | Intent | Parameters |
/// |--------|------------|
/// | add | `Clothing`: item names, `number`: quantities |
/// | remove | `clothing`: item names |
/// | complete | none |
/// | track | `number`: order id, `0` or absent when not given |
pub fn resolve_intent(display_name: &str, params: &Map<String, Value>) -> Result<Intent, IntentError> {
    match display_name {
        ADD_INTENT => {
            let items = string_list(params, "Clothing")?;
            let quantities = number_list(params, "number")?
                .into_iter()
                .map(quantity_from_number)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Intent::Add(AddRequest::new(items, quantities)?))
        }
        REMOVE_INTENT => Ok(Intent::Remove(match string_list(params, "clothing") {
            Ok(items) => RemoveRequest::new(items),
            Err(e) => RemoveRequest::unreadable(e),
        })),
        COMPLETE_INTENT => Ok(Intent::Complete),
        TRACK_INTENT => {
            let number = single_number(params, "number")?;
            Ok(Intent::Track(TrackRequest::from_number(number)?))
        }
        other => Err(IntentError::UnknownIntent(other.to_string())),
    }
}

/// Absent, `null` and `""` count as no value.
fn present<'a>(params: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    match params.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(value),
    }
}

/// A list of strings; a single string is a one-item list.
fn string_list(params: &Map<String, Value>, key: &str) -> Result<Vec<String>, IntentError> {
    match present(params, key) {
        None => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(vec![s.clone()]),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| {
                value
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| IntentError::invalid(key, format!("{value} is not a string")))
            })
            .collect(),
        Some(other) => Err(IntentError::invalid(
            key,
            format!("{other} is not a list of strings"),
        )),
    }
}

/// A list of numbers; a single number is a one-item list.
fn number_list(params: &Map<String, Value>, key: &str) -> Result<Vec<f64>, IntentError> {
    match present(params, key) {
        None => Ok(Vec::new()),
        Some(Value::Array(values)) => values.iter().map(|value| number(key, value)).collect(),
        Some(value) => Ok(vec![number(key, value)?]),
    }
}

/// One number, `0` when absent.
fn single_number(params: &Map<String, Value>, key: &str) -> Result<f64, IntentError> {
    match present(params, key) {
        None => Ok(0.0),
        Some(value) => number(key, value),
    }
}

/// Accepts JSON numbers and numeric strings.
fn number(key: &str, value: &Value) -> Result<f64, IntentError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| IntentError::invalid(key, format!("{value} is not a number")))
}
