//! Error body returned by the API on non-2xx responses.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ApiErrorBody {
    /// Best human-readable message for a raw response body.
    ///
    /// Uses the JSON `message` field (string, or list of strings joined with "; ") and falls
    /// back to the raw text.
    pub fn message_from(body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .and_then(|value| message_text(&value))
            .unwrap_or_else(|| body.trim().to_string())
    }
}

pub(crate) fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}
