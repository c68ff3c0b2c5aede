use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One conversation turn. Never mutated after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        let timestamp = Utc::now().timestamp_millis();
        Self {
            id: generate_message_id(timestamp),
            role,
            content: content.trim().to_string(),
            timestamp,
        }
    }

    pub fn user(content: &str) -> Self {
        Self::new(Role::User, content)
    }

    pub fn bot(content: &str) -> Self {
        Self::new(Role::Bot, content)
    }
}

/// `msg-{millis}-{9 lowercase base36 chars}`
pub fn generate_message_id(timestamp: i64) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();
    format!("msg-{}-{}", timestamp, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_trims_content() {
        let message = Message::user("  hello there \n");
        assert_eq!(message.content, "hello there");
        assert_eq!(message.role, Role::User);
        assert!(message.timestamp > 0);
    }

    #[test]
    fn message_ids_follow_timestamp_and_suffix_scheme() {
        let id = generate_message_id(1_700_000_000_000);
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts[0], "msg");
        assert_eq!(parts[1], "1700000000000");
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn consecutive_ids_differ() {
        let a = Message::bot("one");
        let b = Message::bot("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn role_serializes_lowercase() {
        let message = Message {
            id: "msg-1-abc".to_string(),
            role: Role::Bot,
            content: "hi".to_string(),
            timestamp: 1,
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "bot");
        assert_eq!(value["timestamp"], 1);
    }
}
