use crate::connectors::{RemoteAugmentation, RemoteCallError};
use crate::forms::ChatbotRequest;
use actix_web::{post, web, HttpResponse, Result};
use serde_json::json;
use std::sync::Arc;

/// POST /api/chatbot
/// Answers `{message, history, context?}` with `{text}` from the hosted model.
/// A server without a credential refuses before looking at the body.
#[tracing::instrument(name = "Chatbot completion.", skip_all)]
#[post("/chatbot")]
pub async fn chatbot_handler(
    body: web::Bytes,
    connector: web::Data<Arc<dyn RemoteAugmentation>>,
) -> Result<HttpResponse> {
    if !connector.has_credential() {
        tracing::error!("Chatbot request refused, no credential configured");
        return Err(RemoteCallError::MissingCredential.into());
    }

    let request = ChatbotRequest::from_body(&body);
    if !request.has_message() {
        return Ok(HttpResponse::BadRequest().json(json!({ "error": "Message required" })));
    }

    let text = connector
        .request_remote_reply(&request.into_request())
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "Chatbot completion failed");
            err
        })?;

    Ok(HttpResponse::Ok().json(json!({ "text": text })))
}
