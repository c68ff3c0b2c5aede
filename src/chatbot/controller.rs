//! Conversation controller
//!
//! One `ChatSession` per visitor. A send walks
//! `Idle -> AwaitingTypingDelay -> AwaitingRemoteResponse -> AwaitingResponseDelay -> Idle`.
//! Each suspension point races the send's `CancellationToken`, and every state
//! write checks the session generation, so `reset` and `close` can abandon a
//! send without its reply ever landing. History writes are serialized by a
//! separate persist lock and re-check the generation once it is held, so a
//! slow save can never land on top of a reset.

use crate::chatbot::engine::MatchingEngine;
use crate::chatbot::events::ChatEvent;
use crate::chatbot::text::{truncate_message, validate_message};
use crate::configuration::ChatbotSettings;
use crate::connectors::{AugmentationRequest, RemoteAugmentation, RemoteCallError};
use crate::errors::ChatError;
use crate::models::{ChatState, Message};
use crate::portfolio::ContextBundle;
use crate::store::MessageStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tokio_util::sync::CancellationToken;

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPhase {
    Idle,
    AwaitingTypingDelay,
    AwaitingRemoteResponse,
    AwaitingResponseDelay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Replied(Message),
    /// The session was reset or closed before the reply landed
    Cancelled,
}

struct Inner {
    state: ChatState,
    phase: SendPhase,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl Inner {
    /// Abandon the running send, if any. Returns true when one was running.
    fn abandon(&mut self) -> bool {
        self.generation += 1;
        self.phase = SendPhase::Idle;
        self.state.is_typing = false;
        match self.in_flight.take() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }
}

pub struct ChatSession {
    inner: Mutex<Inner>,
    persist: Mutex<()>,
    store: MessageStore,
    engine: Arc<MatchingEngine>,
    remote: Option<Arc<dyn RemoteAugmentation>>,
    settings: ChatbotSettings,
    remote_timeout: Duration,
    events: broadcast::Sender<ChatEvent>,
}

impl ChatSession {
    /// Restore a session from its store. Nothing is written until the first change.
    pub async fn load(
        store: MessageStore,
        engine: Arc<MatchingEngine>,
        remote: Option<Arc<dyn RemoteAugmentation>>,
        settings: ChatbotSettings,
        remote_timeout: Duration,
    ) -> Self {
        let state = ChatState {
            messages: store.load().await,
            is_open: false,
            is_minimized: store.minimized().await,
            is_typing: false,
        };
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            inner: Mutex::new(Inner {
                state,
                phase: SendPhase::Idle,
                generation: 0,
                in_flight: None,
            }),
            persist: Mutex::new(()),
            store,
            engine,
            remote,
            settings,
            remote_timeout,
            events,
        }
    }

    pub fn id(&self) -> &str {
        self.store.scope()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: ChatEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }

    pub async fn snapshot(&self) -> ChatState {
        self.inner.lock().await.state.clone()
    }

    pub async fn phase(&self) -> SendPhase {
        self.inner.lock().await.phase
    }

    pub async fn has_unread(&self) -> bool {
        self.store.has_unread().await
    }

    #[tracing::instrument(name = "Send chat message", skip(self, text), fields(session = %self.id()))]
    pub async fn send_message(&self, text: &str) -> Result<SendOutcome, ChatError> {
        if let Some(reason) = validate_message(text, self.settings.max_user_message_length) {
            return Err(ChatError::Validation(reason));
        }

        let user_message = Message::user(text);
        let (token, generation, history, messages) = {
            let mut inner = self.inner.lock().await;
            if inner.phase != SendPhase::Idle {
                return Err(ChatError::SessionBusy);
            }

            let start = inner
                .state
                .messages
                .len()
                .saturating_sub(self.settings.history_window);
            let history = inner.state.messages[start..].to_vec();

            inner.state.messages.push(user_message.clone());
            inner.state.is_typing = true;
            inner.phase = SendPhase::AwaitingTypingDelay;
            let token = CancellationToken::new();
            inner.in_flight = Some(token.clone());

            (token, inner.generation, history, inner.state.messages.clone())
        };

        self.publish(ChatEvent::MessageAppended(user_message.clone()));
        self.publish(ChatEvent::TypingChanged { is_typing: true });
        self.persist(generation, &messages).await;

        if !pause(&token, Duration::from_millis(self.settings.typing_delay_ms)).await {
            return Ok(SendOutcome::Cancelled);
        }
        if !self.advance(generation, SendPhase::AwaitingRemoteResponse).await {
            return Ok(SendOutcome::Cancelled);
        }

        let reply = tokio::select! {
            _ = token.cancelled() => return Ok(SendOutcome::Cancelled),
            reply = self.compose_reply(&user_message.content, history) => reply,
        };

        if !self.advance(generation, SendPhase::AwaitingResponseDelay).await {
            return Ok(SendOutcome::Cancelled);
        }
        if !pause(&token, Duration::from_millis(self.settings.response_delay_ms)).await {
            return Ok(SendOutcome::Cancelled);
        }

        let bot_message = Message::bot(&reply);
        let messages = {
            let mut inner = self.inner.lock().await;
            if inner.generation != generation {
                return Ok(SendOutcome::Cancelled);
            }
            inner.state.messages.push(bot_message.clone());
            inner.state.is_typing = false;
            inner.phase = SendPhase::Idle;
            inner.in_flight = None;
            inner.state.messages.clone()
        };

        self.publish(ChatEvent::MessageAppended(bot_message.clone()));
        self.publish(ChatEvent::TypingChanged { is_typing: false });
        self.persist(generation, &messages).await;

        Ok(SendOutcome::Replied(bot_message))
    }

    /// Save history written under `generation`. Skipped once a reset has moved on.
    async fn persist(&self, generation: u64, messages: &[Message]) {
        let _guard = self.persist.lock().await;
        if self.inner.lock().await.generation != generation {
            tracing::debug!(session = %self.id(), "Skipping stale history save");
            return;
        }
        self.store.save(messages).await;
    }

    async fn advance(&self, generation: u64, phase: SendPhase) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return false;
        }
        inner.phase = phase;
        true
    }

    /// Remote reply when one arrives in time, local match otherwise.
    async fn compose_reply(&self, utterance: &str, history: Vec<Message>) -> String {
        let max_length = self.settings.max_bot_message_length;

        match self.request_remote(utterance, history).await {
            Some(Ok(text)) => return truncate_message(text.trim(), max_length),
            Some(Err(err)) => {
                tracing::warn!(error = %err, session = %self.id(), "Remote reply failed, answering locally");
            }
            None => {}
        }

        self.engine.select_response(utterance)
    }

    async fn request_remote(
        &self,
        utterance: &str,
        history: Vec<Message>,
    ) -> Option<Result<String, RemoteCallError>> {
        let remote = self.remote.as_ref()?;
        let request = AugmentationRequest {
            message: utterance.to_string(),
            history,
            context: Some(ContextBundle::build().to_value()),
        };

        let result = match tokio::time::timeout(
            self.remote_timeout,
            remote.request_remote_reply(&request),
        )
        .await
        {
            Ok(Ok(text)) if text.trim().is_empty() => Err(RemoteCallError::EmptyPayload),
            Ok(result) => result,
            Err(_) => Err(RemoteCallError::Timeout),
        };
        Some(result)
    }

    /// Clear history and start over with the welcome message.
    pub async fn reset(&self) -> Message {
        let welcome = Message::bot(&self.settings.welcome_message);
        let abandoned = {
            let mut inner = self.inner.lock().await;
            let abandoned = inner.abandon();
            inner.state.messages = vec![welcome.clone()];
            abandoned
        };
        if abandoned {
            tracing::info!(session = %self.id(), "Reset abandoned an in-flight reply");
        }

        {
            let _guard = self.persist.lock().await;
            self.store.clear().await;
            self.store.save(std::slice::from_ref(&welcome)).await;
        }

        self.publish(ChatEvent::Reset);
        self.publish(ChatEvent::MessageAppended(welcome.clone()));
        welcome
    }

    pub async fn open(&self) {
        {
            let mut inner = self.inner.lock().await;
            inner.state.is_open = true;
            inner.state.is_minimized = false;
        }
        self.store.mark_pulse_seen().await;
        self.store.mark_opened().await;
        self.store.set_minimized(false).await;
        self.publish(ChatEvent::StateChanged {
            is_open: true,
            is_minimized: false,
        });
    }

    /// Close the window. A reply still in flight is dropped.
    pub async fn close(&self) {
        let (abandoned, is_minimized) = {
            let mut inner = self.inner.lock().await;
            let abandoned = inner.abandon();
            inner.state.is_open = false;
            (abandoned, inner.state.is_minimized)
        };
        if abandoned {
            self.publish(ChatEvent::TypingChanged { is_typing: false });
        }
        self.publish(ChatEvent::StateChanged {
            is_open: false,
            is_minimized,
        });
    }

    pub async fn toggle_minimize(&self) -> bool {
        let (is_open, is_minimized) = {
            let mut inner = self.inner.lock().await;
            inner.state.is_minimized = !inner.state.is_minimized;
            (inner.state.is_open, inner.state.is_minimized)
        };
        self.store.set_minimized(is_minimized).await;
        self.publish(ChatEvent::StateChanged {
            is_open,
            is_minimized,
        });
        is_minimized
    }
}

/// Sleep unless cancelled first. False when cancelled.
async fn pause(token: &CancellationToken, delay: Duration) -> bool {
    tokio::select! {
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}
