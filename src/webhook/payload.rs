//! The slice of the dialogue platform's webhook JSON this service reads and writes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub query_result: QueryResult,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub intent: IntentInfo,
    /// Untyped until the intent is known; see [`resolve_intent`](super::resolve_intent).
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub output_contexts: Vec<OutputContext>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentInfo {
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputContext {
    /// `projects/<p>/agent/sessions/<session>/contexts/<context>`
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookResponse {
    #[serde(rename = "fulfillmentText")]
    pub fulfillment_text: String,
}

impl WebhookResponse {
    pub fn new(fulfillment_text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: fulfillment_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_platform_request() {
        let body = json!({
            "responseId": "r-1",
            "queryResult": {
                "queryText": "2 shirts please",
                "intent": { "displayName": "order.add - context: ongoing-order" },
                "parameters": { "Clothing": ["shirt"], "number": [2.0] },
                "outputContexts": [
                    { "name": "projects/p/agent/sessions/abc/contexts/ongoing-order", "lifespanCount": 5 }
                ]
            }
        });

        let request: WebhookRequest = serde_json::from_value(body).unwrap();
        assert_eq!(
            request.query_result.intent.display_name,
            "order.add - context: ongoing-order"
        );
        assert_eq!(request.query_result.parameters["number"], json!([2.0]));
        assert_eq!(request.query_result.output_contexts.len(), 1);
    }

    #[test]
    fn test_response_field_name() {
        let body = serde_json::to_value(WebhookResponse::new("hi")).unwrap();
        assert_eq!(body, json!({ "fulfillmentText": "hi" }));
    }
}
