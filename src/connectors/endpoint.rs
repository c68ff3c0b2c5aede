use super::{AugmentationRequest, RemoteAugmentation, RemoteCallError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::Instrument;

#[derive(Debug, Deserialize)]
struct EndpointReply {
    #[serde(default)]
    text: Option<String>,
}

/// Calls a deployed `/api/chatbot` endpoint.
pub struct HttpAugmentationClient {
    endpoint_url: String,
    http_client: reqwest::Client,
}

impl HttpAugmentationClient {
    pub fn new(endpoint_url: &str, timeout_secs: u64) -> Result<Self, RemoteCallError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()
            .map_err(|err| RemoteCallError::Network(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            endpoint_url: endpoint_url.to_string(),
            http_client,
        })
    }
}

#[async_trait]
impl RemoteAugmentation for HttpAugmentationClient {
    async fn request_remote_reply(
        &self,
        request: &AugmentationRequest,
    ) -> Result<String, RemoteCallError> {
        let span = tracing::info_span!("chatbot_endpoint_request", url = %self.endpoint_url);
        let resp = self
            .http_client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .instrument(span)
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteCallError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let reply: EndpointReply = resp.json().await?;
        reply
            .text
            .filter(|text| !text.trim().is_empty())
            .ok_or(RemoteCallError::EmptyPayload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> AugmentationRequest {
        AugmentationRequest {
            message: "What projects has he built?".to_string(),
            history: vec![Message::bot("Hey!")],
            context: None,
        }
    }

    async fn client_for(server: &MockServer) -> HttpAugmentationClient {
        HttpAugmentationClient::new(&format!("{}/api/chatbot", server.uri()), 5).unwrap()
    }

    #[tokio::test]
    async fn posts_message_and_history() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chatbot"))
            .and(body_partial_json(json!({ "message": "What projects has he built?" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "Three of them." })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .await
            .request_remote_reply(&request())
            .await
            .unwrap();
        assert_eq!(reply, "Three of them.");
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(502).set_body_json(json!({ "error": "OpenAI API error" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .request_remote_reply(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteCallError::BadStatus { status: 502, .. }));
    }

    #[tokio::test]
    async fn missing_text_is_an_empty_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "  " })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .request_remote_reply(&request())
            .await
            .unwrap_err();
        assert_eq!(err, RemoteCallError::EmptyPayload);
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .request_remote_reply(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteCallError::Malformed(_)));
    }
}
