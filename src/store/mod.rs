//! Conversation persistence.
//!
//! `MessageStore` keeps a session's history and UI flags in a key-value
//! backend. Every failure is logged and absorbed here: a broken store
//! degrades the chat to in-memory only, it never breaks it.

mod memory;
mod redis_store;

use crate::configuration::{StorageBackend, StorageSettings};
use crate::errors::StorageError;
use crate::models::Message;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub use self::memory::InMemoryStore;
pub use self::redis_store::RedisStore;

pub const CHAT_HISTORY_KEY: &str = "chatbot-history";
pub const PULSE_SEEN_KEY: &str = "chatbot-pulse-seen";
pub const MINIMIZED_KEY: &str = "chatbot-minimized";
pub const LAST_OPENED_KEY: &str = "chatbot-last-opened";

/// Messages kept when a full history does not fit
pub const TRUNCATED_HISTORY_LEN: usize = 20;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Only the most recent messages fit
    Truncated(usize),
    Dropped,
}

#[derive(Clone)]
pub struct MessageStore {
    backend: Arc<dyn KeyValueStore>,
    scope: String,
}

impl MessageStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, scope: &str) -> Self {
        Self {
            backend,
            scope: scope.to_string(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    fn key(&self, name: &str) -> String {
        format!("{}:{}", self.scope, name)
    }

    async fn read(&self, name: &str) -> Option<String> {
        match self.backend.get(&self.key(name)).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, scope = %self.scope, key = name, "Storage read failed");
                None
            }
        }
    }

    async fn write(&self, name: &str, value: &str) {
        if let Err(err) = self.backend.set(&self.key(name), value).await {
            tracing::warn!(error = %err, scope = %self.scope, key = name, "Storage write failed");
        }
    }

    /// Stored history, or empty on a missing, unreadable or corrupt value.
    pub async fn load(&self) -> Vec<Message> {
        let Some(payload) = self.read(CHAT_HISTORY_KEY).await else {
            return vec![];
        };

        match serde_json::from_str::<Vec<Message>>(&payload) {
            Ok(messages) => messages,
            Err(err) => {
                let err = StorageError::Corrupt {
                    key: self.key(CHAT_HISTORY_KEY),
                    reason: err.to_string(),
                };
                tracing::warn!(error = %err, "Discarding stored chat history");
                vec![]
            }
        }
    }

    /// Full history first, then the last 20 messages, then give up.
    pub async fn save(&self, messages: &[Message]) -> SaveOutcome {
        let key = self.key(CHAT_HISTORY_KEY);

        let first = self.try_save(&key, messages).await;
        let Err(err) = first else {
            return SaveOutcome::Saved;
        };
        tracing::warn!(error = %err, scope = %self.scope, count = messages.len(), "Failed to save chat history");

        let start = messages.len().saturating_sub(TRUNCATED_HISTORY_LEN);
        let recent = &messages[start..];
        match self.try_save(&key, recent).await {
            Ok(()) => SaveOutcome::Truncated(recent.len()),
            Err(err) => {
                tracing::warn!(error = %err, scope = %self.scope, "Failed to save even truncated history");
                SaveOutcome::Dropped
            }
        }
    }

    async fn try_save(&self, key: &str, messages: &[Message]) -> Result<(), StorageError> {
        let payload =
            serde_json::to_string(messages).map_err(|err| StorageError::Encode(err.to_string()))?;
        self.backend.set(key, &payload).await
    }

    pub async fn clear(&self) {
        if let Err(err) = self.backend.remove(&self.key(CHAT_HISTORY_KEY)).await {
            tracing::warn!(error = %err, scope = %self.scope, "Failed to clear chat history");
        }
    }

    pub async fn pulse_seen(&self) -> bool {
        self.read(PULSE_SEEN_KEY).await.as_deref() == Some("true")
    }

    pub async fn mark_pulse_seen(&self) {
        self.write(PULSE_SEEN_KEY, "true").await;
    }

    pub async fn minimized(&self) -> bool {
        self.read(MINIMIZED_KEY).await.as_deref() == Some("true")
    }

    pub async fn set_minimized(&self, minimized: bool) {
        self.write(MINIMIZED_KEY, if minimized { "true" } else { "false" })
            .await;
    }

    pub async fn last_opened(&self) -> Option<i64> {
        self.read(LAST_OPENED_KEY)
            .await
            .and_then(|value| value.trim().parse::<i64>().ok())
    }

    pub async fn mark_opened(&self) {
        self.mark_opened_at(Utc::now().timestamp_millis()).await;
    }

    pub async fn mark_opened_at(&self, timestamp: i64) {
        self.write(LAST_OPENED_KEY, &timestamp.to_string()).await;
    }

    /// Newest stored message is newer than the last time the chat was opened.
    pub async fn has_unread(&self) -> bool {
        let messages = self.load().await;
        let Some(latest) = messages.iter().map(|m| m.timestamp).max() else {
            return false;
        };

        match self.last_opened().await {
            Some(opened) => latest > opened,
            None => true,
        }
    }
}

/// Redis when configured and reachable, otherwise process memory.
pub async fn init(settings: &StorageSettings) -> Arc<dyn KeyValueStore> {
    match settings.backend {
        StorageBackend::Redis => {
            match RedisStore::new(&settings.redis_url, &settings.key_prefix).await {
                Ok(store) => {
                    tracing::info!("Chat storage backed by Redis ({})", settings.redis_url);
                    Arc::new(store)
                }
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        "Failed to initialize Redis chat storage, falling back to memory"
                    );
                    Arc::new(InMemoryStore::new(settings.max_bytes))
                }
            }
        }
        StorageBackend::Memory => {
            tracing::warn!("Chat storage kept in memory - history is lost on restart");
            Arc::new(InMemoryStore::new(settings.max_bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn message(n: i64) -> Message {
        Message {
            id: format!("msg-{}-abcdefghi", n),
            role: if n % 2 == 0 { Role::User } else { Role::Bot },
            content: format!("message number {}", n),
            timestamp: 1_700_000_000_000 + n,
        }
    }

    fn store_with(backend: InMemoryStore) -> MessageStore {
        MessageStore::new(Arc::new(backend), "session-a")
    }

    #[tokio::test]
    async fn load_on_empty_store_is_empty() {
        let store = store_with(InMemoryStore::default());
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = store_with(InMemoryStore::default());
        let messages: Vec<Message> = (0..5).map(message).collect();

        assert_eq!(store.save(&messages).await, SaveOutcome::Saved);
        assert_eq!(store.load().await, messages);
    }

    #[tokio::test]
    async fn clear_then_load_is_always_empty() {
        let store = store_with(InMemoryStore::default());
        store.clear().await;
        assert!(store.load().await.is_empty());

        store.save(&(0..3).map(message).collect::<Vec<_>>()).await;
        store.clear().await;
        assert!(store.load().await.is_empty());
        store.clear().await;
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn quota_failure_keeps_last_twenty() {
        let messages: Vec<Message> = (0..40).map(message).collect();
        let twenty = serde_json::to_string(&messages[20..]).unwrap().len();
        let store = store_with(InMemoryStore::new(Some(twenty)));

        assert_eq!(store.save(&messages).await, SaveOutcome::Truncated(20));
        assert_eq!(store.load().await, messages[20..].to_vec());
    }

    #[tokio::test]
    async fn repeated_failure_is_dropped_silently() {
        let backend = Arc::new(InMemoryStore::new(Some(10)));
        let store = MessageStore::new(backend.clone(), "session-a");

        let messages: Vec<Message> = (0..3).map(message).collect();
        assert_eq!(store.save(&messages).await, SaveOutcome::Dropped);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_history_reads_as_empty_and_spares_other_keys() {
        let backend = Arc::new(InMemoryStore::default());
        let store = MessageStore::new(backend.clone(), "session-a");
        store.set_minimized(true).await;
        backend
            .set("session-a:chatbot-history", "{not json")
            .await
            .unwrap();

        assert!(store.load().await.is_empty());
        assert!(store.minimized().await);

        backend
            .set("session-a:chatbot-history", "{\"an\":\"object\"}")
            .await
            .unwrap();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn sessions_do_not_share_keys() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::default());
        let a = MessageStore::new(backend.clone(), "a");
        let b = MessageStore::new(backend, "b");

        a.save(&[message(1)]).await;
        assert!(b.load().await.is_empty());
    }

    #[tokio::test]
    async fn flags_default_to_false_and_persist() {
        let store = store_with(InMemoryStore::default());
        assert!(!store.pulse_seen().await);
        assert!(!store.minimized().await);

        store.mark_pulse_seen().await;
        store.set_minimized(true).await;
        assert!(store.pulse_seen().await);
        assert!(store.minimized().await);

        store.set_minimized(false).await;
        assert!(!store.minimized().await);
    }

    #[tokio::test]
    async fn unread_tracks_last_opened() {
        let store = store_with(InMemoryStore::default());
        assert!(!store.has_unread().await);

        store.save(&[message(1), message(2)]).await;
        assert!(store.has_unread().await);

        store.mark_opened_at(1_700_000_000_002).await;
        assert!(!store.has_unread().await);

        store.mark_opened_at(1_700_000_000_001).await;
        assert!(store.has_unread().await);
    }

    #[tokio::test]
    async fn garbage_last_opened_counts_as_never_opened() {
        let backend = Arc::new(InMemoryStore::default());
        let store = MessageStore::new(backend.clone(), "s");
        store.save(&[message(1)]).await;
        backend.set("s:chatbot-last-opened", "yesterday").await.unwrap();

        assert_eq!(store.last_opened().await, None);
        assert!(store.has_unread().await);
    }
}
