use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Lenient conversion from a raw JSON element. Callers are not required
    /// to send well-formed messages: a missing or non-string `content`
    /// becomes empty text, and any role other than `"user"` renders as the
    /// assistant, matching how the prompt labels history lines.
    pub fn from_value(value: &Value) -> Self {
        let role = match value.get("role").and_then(Value::as_str) {
            Some("user") => Role::User,
            _ => Role::Assistant,
        };
        let content = value
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { role, content }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(rename = "memoryContext", skip_serializing_if = "Option::is_none")]
    pub memory_context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
