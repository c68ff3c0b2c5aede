use crate::models::Message;
use serde::Serialize;

/// Notifications published by a chat session to its subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    MessageAppended(Message),
    TypingChanged { is_typing: bool },
    StateChanged { is_open: bool, is_minimized: bool },
    Reset,
}
