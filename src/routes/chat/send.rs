use super::chat_error;
use crate::chatbot::{suggest_follow_up, SendOutcome};
use crate::forms::SendMessageForm;
use crate::helpers::JsonResponse;
use crate::models::ChatReply;
use crate::services::SessionRegistry;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

/// POST /chat/{session}/messages
/// Runs one full send and returns the bot reply with follow-up prompts.
/// The category behind the follow-ups always comes from the local catalog,
/// including when the reply text itself came from the remote model.
#[tracing::instrument(name = "Send chat message.", skip(registry))]
#[post("/{session}/messages")]
pub async fn send_handler(
    path: web::Path<(String,)>,
    form: web::Json<SendMessageForm>,
    registry: web::Data<SessionRegistry>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<ChatReply>::build().bad_request(errors.to_string()));
    }

    let session_id = path.into_inner().0;
    let session = registry
        .get_or_create(&session_id)
        .await
        .map_err(chat_error::<ChatReply>)?;

    let outcome = session
        .send_message(&form.message)
        .await
        .map_err(chat_error::<ChatReply>)?;

    let reply = match outcome {
        SendOutcome::Replied(message) => {
            let category = registry.engine().select_match(&form.message).category;
            ChatReply {
                reply: Some(message),
                category: Some(category),
                follow_ups: suggest_follow_up(category)
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }
        }
        SendOutcome::Cancelled => {
            return Ok(JsonResponse::build()
                .set_id(&session_id)
                .set_item(ChatReply::default())
                .ok("Cancelled"));
        }
    };

    Ok(JsonResponse::build()
        .set_id(&session_id)
        .set_item(reply)
        .ok("OK"))
}
