use crate::connectors::openai::MAX_INBOUND_MESSAGE_CHARS;
use crate::connectors::AugmentationRequest;
use crate::models::{generate_message_id, Message, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_valid::Validate;

/// Body of `POST /chat/{session}/messages`. The configured length limit is
/// applied by the session; this only bounds the payload.
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct SendMessageForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 4000)]
    pub message: String,
}

/// Body of `POST /api/chatbot`. Read leniently: anything missing or of the
/// wrong shape is treated as absent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChatbotRequest {
    pub message: String,
    pub history: Vec<Message>,
    pub context: Option<Value>,
}

impl ChatbotRequest {
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    pub fn from_value(value: &Value) -> Self {
        let message = match value.get("message") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };

        let history = value
            .get("history")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value::<HistoryEntry>(item.clone()).ok())
                    .map(HistoryEntry::into_message)
                    .collect()
            })
            .unwrap_or_default();

        let context = value.get("context").filter(|v| is_truthy(v)).cloned();

        Self {
            message: message.chars().take(MAX_INBOUND_MESSAGE_CHARS).collect(),
            history,
            context,
        }
    }

    pub fn has_message(&self) -> bool {
        !self.message.trim().is_empty()
    }

    pub fn into_request(self) -> AugmentationRequest {
        AugmentationRequest {
            message: self.message,
            history: self.history,
            context: self.context,
        }
    }
}

/// Inbound history turn. Only `role` and `content` are required; any role
/// other than `bot` is treated as the visitor.
#[derive(Deserialize)]
struct HistoryEntry {
    role: String,
    content: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    timestamp: Option<i64>,
}

impl HistoryEntry {
    fn into_message(self) -> Message {
        let timestamp = self.timestamp.unwrap_or_default();
        Message {
            id: self.id.unwrap_or_else(|| generate_message_id(timestamp)),
            role: if self.role == "bot" { Role::Bot } else { Role::User },
            content: self.content,
            timestamp,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
