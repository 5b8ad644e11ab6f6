use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Error body returned by the controller API on non-success responses.
///
/// `detail` is usually a string, but validation failures carry a list of
/// field errors instead, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(detail.into())),
        }
    }

    /// Human-readable failure message, falling back to a generic one when
    /// `detail` is missing or empty.
    pub fn message(&self) -> String {
        match &self.detail {
            Some(Value::String(text)) if !text.is_empty() => text.clone(),
            Some(value) if crate::protocol::is_truthy(value) => value.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
