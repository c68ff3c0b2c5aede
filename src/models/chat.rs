use crate::models::{Category, Message};
use serde::{Deserialize, Serialize};

/// Snapshot of one chat session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_typing: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct QuickAction {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Sent as the user's message when the action is picked
    pub prompt: &'static str,
}

/// What the session routes return for a session
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    #[serde(flatten)]
    pub state: ChatState,
    pub has_unread: bool,
}

/// Result of one send: the bot reply and prompts to continue with
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    /// Absent when the session was reset or closed mid-send
    pub reply: Option<Message>,
    pub category: Option<Category>,
    pub follow_ups: Vec<String>,
}
