use super::{AugmentationRequest, RemoteAugmentation, RemoteCallError};
use crate::configuration::OpenAiSettings;
use crate::models::{Message, Role};
use crate::portfolio::ContextBundle;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::Instrument;

/// Inbound messages are cut to this many characters
pub const MAX_INBOUND_MESSAGE_CHARS: usize = 1000;
/// Turns of client history forwarded upstream
pub const MAX_HISTORY_TURNS: usize = 12;

const SYSTEM_PROMPT: &[&str] = &[
    "You are Pawel's helpful portfolio assistant.",
    "Use ONLY the provided experiences and projects context to answer accurately.",
    "Linking rule: when you mention a project or resource with a URL, include the full https link as plain text (no markdown) so the client underlines it and makes it clickable.",
    "Conversation policy:",
    "- By default focus on ONE item only: either a single project OR a single experience (whichever best matches the question). Provide 2-4 concise sentences and include exactly one relevant link if available.",
    "- If the user asks generally about 'projects' or 'experience', give a short sampler: up to three one-line bullets (each with a plain https link when available), then ask the user to pick one for a deeper dive.",
    "- If the user explicitly asks for multiple, provide brief one-liners as above and ask which to expand next.",
    "- If the user asks for both projects AND experience, include one project and one experience (1-2 lines each) and then ask what to expand next.",
    "Always end your reply with a short follow-up question inviting the user to continue.",
];

pub fn system_prompt() -> String {
    SYSTEM_PROMPT.join(" ")
}

/// Client for the OpenAI Responses API.
pub struct OpenAiClient {
    base_url: String,
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    max_output_tokens: u32,
    retry_attempts: usize,
}

impl OpenAiClient {
    pub fn new(settings: &OpenAiSettings) -> Result<Self, RemoteCallError> {
        let timeout = Duration::from_secs(settings.timeout_secs.max(1));
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RemoteCallError::Network(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http_client,
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            max_output_tokens: settings.max_output_tokens,
            retry_attempts: settings.retry_attempts.max(1),
        })
    }

    /// Responses API `input`: system prompt plus context, recent history, then the new message.
    pub fn build_input(message: &str, history: &[Message], context: &Value) -> Value {
        let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
        let mut input = vec![json!({
            "role": "system",
            "content": [
                { "type": "input_text", "text": system_prompt() },
                { "type": "input_text", "text": context.to_string() },
            ]
        })];

        input.extend(history[start..].iter().map(|m| {
            let (role, kind) = match m.role {
                Role::Bot => ("assistant", "output_text"),
                Role::User => ("user", "input_text"),
            };
            json!({ "role": role, "content": [{ "type": kind, "text": m.content }] })
        }));

        input.push(json!({
            "role": "user",
            "content": [{ "type": "input_text", "text": message }]
        }));

        Value::Array(input)
    }

    async fn send_request(&self, api_key: &str, body: &Value) -> Result<Value, RemoteCallError> {
        let url = format!("{}/responses", self.base_url);
        let mut attempt = 0usize;
        let mut last_error: Option<RemoteCallError> = None;

        while attempt < self.retry_attempts {
            attempt += 1;
            let span = tracing::info_span!("openai_http_request", attempt, model = %self.model);

            let result = self
                .http_client
                .post(&url)
                .bearer_auth(api_key)
                .json(body)
                .send()
                .instrument(span)
                .await;

            match result {
                Ok(resp) => {
                    let status = resp.status();
                    let text = resp.text().await?;

                    if status.is_success() {
                        return serde_json::from_str::<Value>(&text)
                            .map_err(|err| RemoteCallError::Malformed(err.to_string()));
                    }

                    let error = RemoteCallError::BadStatus {
                        status: status.as_u16(),
                        body: text,
                    };
                    if !status.is_server_error() {
                        return Err(error);
                    }
                    last_error = Some(error);
                }
                Err(err) => {
                    last_error = Some(RemoteCallError::from(err));
                }
            }

            if attempt < self.retry_attempts {
                let backoff = Duration::from_millis(100 * (1_u64 << (attempt - 1)));
                tokio::time::sleep(backoff).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| RemoteCallError::Network("OpenAI request failed".to_string())))
    }
}

#[async_trait]
impl RemoteAugmentation for OpenAiClient {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    #[tracing::instrument(name = "Request OpenAI reply", skip_all)]
    async fn request_remote_reply(
        &self,
        request: &AugmentationRequest,
    ) -> Result<String, RemoteCallError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(RemoteCallError::MissingCredential)?;

        let message: String = request.message.chars().take(MAX_INBOUND_MESSAGE_CHARS).collect();
        let context = request
            .context
            .clone()
            .unwrap_or_else(|| ContextBundle::build().to_value());

        let body = json!({
            "model": self.model,
            "input": Self::build_input(&message, &request.history, &context),
            "max_output_tokens": self.max_output_tokens,
        });

        let payload = self.send_request(api_key, &body).await?;
        extract_output_text(&payload).ok_or(RemoteCallError::EmptyPayload)
    }
}

/// Reply text from the shapes the Responses API is known to return.
pub fn extract_output_text(payload: &Value) -> Option<String> {
    let candidates = [
        payload.get("output_text"),
        payload.pointer("/response/output_text"),
        payload.pointer("/output/0/content/0/text"),
        payload.pointer("/response/output/0/content/0/text"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: &str, api_key: Option<&str>) -> OpenAiClient {
        OpenAiClient::new(&OpenAiSettings {
            base_url: base_url.to_string(),
            api_key: api_key.map(str::to_string),
            retry_attempts: 2,
            ..OpenAiSettings::default()
        })
        .unwrap()
    }

    fn request(message: &str) -> AugmentationRequest {
        AugmentationRequest {
            message: message.to_string(),
            history: vec![],
            context: Some(json!({ "meta": { "name": "test" } })),
        }
    }

    #[test]
    fn output_text_is_read_in_order() {
        assert_eq!(
            extract_output_text(&json!({ "output_text": "top" })).as_deref(),
            Some("top")
        );
        assert_eq!(
            extract_output_text(&json!({ "response": { "output_text": "wrapped" } })).as_deref(),
            Some("wrapped")
        );
        assert_eq!(
            extract_output_text(&json!({ "output": [{ "content": [{ "text": "nested" }] }] }))
                .as_deref(),
            Some("nested")
        );
        assert_eq!(
            extract_output_text(
                &json!({ "response": { "output": [{ "content": [{ "text": "deep" }] }] } })
            )
            .as_deref(),
            Some("deep")
        );
    }

    #[test]
    fn empty_or_non_string_output_is_none() {
        assert_eq!(extract_output_text(&json!({})), None);
        assert_eq!(extract_output_text(&json!({ "output_text": "" })), None);
        assert_eq!(extract_output_text(&json!({ "output_text": 42 })), None);
        assert_eq!(extract_output_text(&json!({ "output": [] })), None);
    }

    #[test]
    fn input_maps_roles_and_keeps_last_twelve_turns() {
        let mut history = Vec::new();
        for n in 0..15 {
            history.push(if n % 2 == 0 {
                Message::user(&format!("question {}", n))
            } else {
                Message::bot(&format!("answer {}", n))
            });
        }

        let input = OpenAiClient::build_input("latest", &history, &json!({ "k": "v" }));
        let items = input.as_array().unwrap();

        // system + 12 history + the new message
        assert_eq!(items.len(), 14);
        assert_eq!(items[0]["role"], "system");
        assert_eq!(items[0]["content"][1]["text"], "{\"k\":\"v\"}");
        assert_eq!(items[1]["content"][0]["text"], "answer 3");
        assert_eq!(items[1]["role"], "assistant");
        assert_eq!(items[1]["content"][0]["type"], "output_text");
        assert_eq!(items[2]["role"], "user");
        assert_eq!(items[2]["content"][0]["type"], "input_text");
        assert_eq!(items[13]["content"][0]["text"], "latest");
    }

    #[tokio::test]
    async fn missing_key_is_refused_without_a_call() {
        let server = MockServer::start().await;
        let err = client(&server.uri(), None)
            .request_remote_reply(&request("hi"))
            .await
            .unwrap_err();

        assert_eq!(err, RemoteCallError::MissingCredential);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_reply_returns_output_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/responses"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({ "model": "gpt-4.1-mini", "max_output_tokens": 500 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output_text": "Hello!" })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client(&server.uri(), Some("sk-test"))
            .request_remote_reply(&request("hi"))
            .await
            .unwrap();
        assert_eq!(reply, "Hello!");
    }

    #[tokio::test]
    async fn client_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/responses"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server.uri(), Some("sk-test"))
            .request_remote_reply(&request("hi"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RemoteCallError::BadStatus {
                status: 401,
                body: "bad key".to_string()
            }
        );
    }

    #[tokio::test]
    async fn server_error_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/responses"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .expect(2)
            .mount(&server)
            .await;

        let err = client(&server.uri(), Some("sk-test"))
            .request_remote_reply(&request("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteCallError::BadStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn blank_output_is_an_empty_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/responses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output": [] })))
            .mount(&server)
            .await;

        let err = client(&server.uri(), Some("sk-test"))
            .request_remote_reply(&request("hi"))
            .await
            .unwrap_err();
        assert_eq!(err, RemoteCallError::EmptyPayload);
    }
}
