use super::{chat_error, session_view};
use crate::helpers::JsonResponse;
use crate::models::SessionView;
use crate::services::SessionRegistry;
use actix_web::{delete, web, Responder, Result};

/// DELETE /chat/{session}
/// Clears the conversation back to the welcome message.
#[tracing::instrument(name = "Reset chat session.", skip(registry))]
#[delete("/{session}")]
pub async fn reset_handler(
    path: web::Path<(String,)>,
    registry: web::Data<SessionRegistry>,
) -> Result<impl Responder> {
    let session_id = path.into_inner().0;
    let session = registry
        .get_or_create(&session_id)
        .await
        .map_err(chat_error::<SessionView>)?;

    session.reset().await;

    Ok(JsonResponse::build()
        .set_id(&session_id)
        .set_item(session_view(&session).await)
        .ok("Conversation reset"))
}
