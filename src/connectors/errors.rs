use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Errors that can occur while asking a remote model for a reply.
/// The conversation controller treats every variant the same way:
/// fall back to the local matching engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCallError {
    /// Bounded wait elapsed
    Timeout,
    /// Connection or transport failure
    Network(String),
    /// Non-success HTTP status from the remote side
    BadStatus { status: u16, body: String },
    /// Success status but no usable text
    EmptyPayload,
    /// Payload could not be decoded
    Malformed(String),
    /// Server has no credential for the model provider
    MissingCredential,
}

impl fmt::Display for RemoteCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "Remote call timed out"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::BadStatus { status, body } => write!(f, "Upstream error {}: {}", status, body),
            Self::EmptyPayload => write!(f, "Empty response from model"),
            Self::Malformed(msg) => write!(f, "Invalid response: {}", msg),
            Self::MissingCredential => write!(f, "Missing OPENAI_API_KEY on server"),
        }
    }
}

impl std::error::Error for RemoteCallError {}

impl ResponseError for RemoteCallError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::MissingCredential | Self::EmptyPayload => json!({ "error": self.to_string() }),
            _ => json!({
                "error": "OpenAI API error",
                "detail": self.detail(),
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl RemoteCallError {
    fn detail(&self) -> String {
        match self {
            Self::BadStatus { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for RemoteCallError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_maps_to_500() {
        let err = RemoteCallError::MissingCredential;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_failures_map_to_502() {
        for err in [
            RemoteCallError::Timeout,
            RemoteCallError::Network("refused".to_string()),
            RemoteCallError::BadStatus {
                status: 429,
                body: "slow down".to_string(),
            },
            RemoteCallError::EmptyPayload,
            RemoteCallError::Malformed("not json".to_string()),
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY, "{}", err);
        }
    }

    #[test]
    fn bad_status_detail_is_the_raw_body() {
        let err = RemoteCallError::BadStatus {
            status: 401,
            body: "{\"error\":\"invalid key\"}".to_string(),
        };
        assert_eq!(err.detail(), "{\"error\":\"invalid key\"}");
    }
}
