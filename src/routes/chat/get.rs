use super::{chat_error, session_view};
use crate::chatbot::QUICK_ACTIONS;
use crate::helpers::JsonResponse;
use crate::models::{QuickAction, SessionView};
use crate::services::SessionRegistry;
use actix_web::{get, web, Responder, Result};

/// GET /chat/quick_actions
#[tracing::instrument(name = "List quick actions.")]
#[get("/quick_actions")]
pub async fn quick_actions_handler() -> Result<impl Responder> {
    Ok(JsonResponse::<QuickAction>::build()
        .set_list(QUICK_ACTIONS.to_vec())
        .ok("OK"))
}

/// GET /chat/{session}
/// Messages, UI flags and unread state for the session.
#[tracing::instrument(name = "Get chat session.", skip(registry))]
#[get("/{session}")]
pub async fn item(
    path: web::Path<(String,)>,
    registry: web::Data<SessionRegistry>,
) -> Result<impl Responder> {
    let session_id = path.into_inner().0;
    let session = registry
        .get_or_create(&session_id)
        .await
        .map_err(chat_error::<SessionView>)?;

    Ok(JsonResponse::build()
        .set_id(&session_id)
        .set_item(session_view(&session).await)
        .ok("OK"))
}
