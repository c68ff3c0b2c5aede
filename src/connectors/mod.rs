//! Remote model connectors
//!
//! The conversation controller and the inbound `/api/chatbot` route only
//! ever see the `RemoteAugmentation` trait. Two HTTP implementations exist:
//!
//! 1. `OpenAiClient` talks to the OpenAI Responses API directly
//! 2. `HttpAugmentationClient` calls a deployed `/api/chatbot` endpoint
//!
//! `MockAugmentation` answers from a script and is used by tests and the console.
//!
//! ```ignore
//! let remote: Option<Arc<dyn RemoteAugmentation>> = connectors::init_remote(&settings);
//! let reply = remote.request_remote_reply(&request).await?;
//! ```

pub mod endpoint;
pub mod errors;
pub mod mock;
pub mod openai;

use crate::configuration::{RemoteMode, Settings};
use crate::models::Message;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub use endpoint::HttpAugmentationClient;
pub use errors::RemoteCallError;
pub use mock::MockAugmentation;
pub use openai::{extract_output_text, OpenAiClient};

/// Body of a remote reply request; also the wire format of `/api/chatbot`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AugmentationRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

#[async_trait]
pub trait RemoteAugmentation: Send + Sync {
    /// False when the connector can never answer for lack of a credential.
    fn has_credential(&self) -> bool {
        true
    }

    /// Reply text for the request, or why there is none.
    async fn request_remote_reply(
        &self,
        request: &AugmentationRequest,
    ) -> Result<String, RemoteCallError>;
}

/// Remote path for the conversation controller. `None` means local matching only.
pub fn init_remote(settings: &Settings) -> Option<Arc<dyn RemoteAugmentation>> {
    match settings.remote.mode {
        RemoteMode::Disabled => {
            tracing::info!("Remote augmentation disabled - answering from the local catalog");
            None
        }
        RemoteMode::Endpoint => {
            match HttpAugmentationClient::new(&settings.remote.endpoint_url, settings.remote.timeout_secs) {
                Ok(client) => {
                    tracing::info!(
                        "Remote augmentation via endpoint ({})",
                        settings.remote.endpoint_url
                    );
                    Some(Arc::new(client))
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to initialize endpoint client, using local catalog");
                    None
                }
            }
        }
        RemoteMode::Direct => {
            if settings.openai.api_key.is_none() {
                tracing::warn!("OPENAI_API_KEY is not set - answering from the local catalog");
                return None;
            }
            match OpenAiClient::new(&settings.openai) {
                Ok(client) => {
                    tracing::info!("Remote augmentation via OpenAI ({})", settings.openai.model);
                    Some(Arc::new(client))
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to initialize OpenAI client, using local catalog");
                    None
                }
            }
        }
    }
}

/// Upstream client behind `/api/chatbot`. Built even without a credential so
/// the route can refuse with a 500 per request.
pub fn init_openai(settings: &Settings) -> Arc<dyn RemoteAugmentation> {
    match OpenAiClient::new(&settings.openai) {
        Ok(client) => {
            if settings.openai.api_key.is_none() {
                tracing::warn!("OPENAI_API_KEY is not set - /api/chatbot will refuse requests");
            }
            Arc::new(client)
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to initialize OpenAI client, falling back to mock");
            Arc::new(MockAugmentation::failing(err))
        }
    }
}
