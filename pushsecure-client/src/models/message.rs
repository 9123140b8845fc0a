//! Dispatched push messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a message dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Recipient push token.
    pub token: String,
    /// Payload as echoed by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageRequest<'a> {
    pub token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a str>,
}
