//! Live chat sessions keyed by visitor session id.
//!
//! Sessions are restored from storage on first use and evicted once idle or
//! when the registry is over capacity. A session still referenced by a
//! request is never evicted, so one id maps to at most one live session.

use crate::chatbot::{Catalog, ChatSession, MatchingEngine};
use crate::configuration::{ChatbotSettings, SessionSettings, Settings};
use crate::connectors::{self, RemoteAugmentation};
use crate::errors::ChatError;
use crate::store::{self, KeyValueStore, MessageStore};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

const MAX_SESSION_ID_LEN: usize = 64;

struct Entry {
    session: Arc<ChatSession>,
    last_used: Instant,
}

impl Entry {
    /// Only the registry holds it
    fn is_detached(&self) -> bool {
        Arc::strong_count(&self.session) == 1
    }
}

pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, Entry>>,
    backend: Arc<dyn KeyValueStore>,
    engine: Arc<MatchingEngine>,
    remote: Option<Arc<dyn RemoteAugmentation>>,
    settings: ChatbotSettings,
    remote_timeout: Duration,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(
        backend: Arc<dyn KeyValueStore>,
        engine: Arc<MatchingEngine>,
        remote: Option<Arc<dyn RemoteAugmentation>>,
        settings: ChatbotSettings,
        remote_timeout: Duration,
    ) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            backend,
            engine,
            remote,
            settings,
            remote_timeout,
            idle_timeout: Duration::ZERO,
            max_sessions: 0,
        }
        .with_limits(&SessionSettings::default())
    }

    pub fn with_limits(mut self, limits: &SessionSettings) -> Self {
        self.idle_timeout = Duration::from_secs(limits.idle_timeout_secs);
        self.max_sessions = limits.max_sessions.max(1);
        self
    }

    /// Storage, catalog and remote path as configured.
    pub async fn from_settings(settings: &Settings) -> Result<Self, ChatError> {
        let catalog = Catalog::portfolio()?;
        let engine = MatchingEngine::new(
            Arc::new(catalog),
            settings.chatbot.max_bot_message_length,
        );

        Ok(Self::new(
            store::init(&settings.storage).await,
            Arc::new(engine),
            connectors::init_remote(settings),
            settings.chatbot.clone(),
            Duration::from_secs(settings.remote.timeout_secs.max(1)),
        )
        .with_limits(&settings.sessions))
    }

    pub fn engine(&self) -> &Arc<MatchingEngine> {
        &self.engine
    }

    /// Existing session, or one restored from storage.
    pub async fn get_or_create(&self, session_id: &str) -> Result<Arc<ChatSession>, ChatError> {
        if !is_valid_session_id(session_id) {
            return Err(ChatError::Validation("Invalid session id".to_string()));
        }

        if let Some(entry) = self.sessions.lock().await.get_mut(session_id) {
            entry.last_used = Instant::now();
            return Ok(entry.session.clone());
        }

        // restore without holding the registry lock
        tracing::debug!(session = session_id, "Restoring chat session");
        let restored = Arc::new(
            ChatSession::load(
                MessageStore::new(self.backend.clone(), session_id),
                self.engine.clone(),
                self.remote.clone(),
                self.settings.clone(),
                self.remote_timeout,
            )
            .await,
        );

        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();
        // a concurrent restore of the same id may have won
        let session = sessions
            .entry(session_id.to_string())
            .and_modify(|entry| entry.last_used = now)
            .or_insert(Entry {
                session: restored,
                last_used: now,
            })
            .session
            .clone();
        self.evict(&mut sessions, now);
        Ok(session)
    }

    fn evict(&self, sessions: &mut HashMap<String, Entry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| {
            !entry.is_detached() || now.duration_since(entry.last_used) < self.idle_timeout
        });

        while sessions.len() > self.max_sessions {
            let oldest = sessions
                .iter()
                .filter(|(_, entry)| entry.is_detached())
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, live = sessions.len(), "Evicted chat sessions");
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn is_valid_session_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_SESSION_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
