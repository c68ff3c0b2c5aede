use super::{chat_error, session_view};
use crate::helpers::JsonResponse;
use crate::models::SessionView;
use crate::services::SessionRegistry;
use actix_web::{post, web, Responder, Result};

#[tracing::instrument(name = "Open chat window.", skip(registry))]
#[post("/{session}/open")]
pub async fn open_handler(
    path: web::Path<(String,)>,
    registry: web::Data<SessionRegistry>,
) -> Result<impl Responder> {
    let session_id = path.into_inner().0;
    let session = registry
        .get_or_create(&session_id)
        .await
        .map_err(chat_error::<SessionView>)?;

    session.open().await;

    Ok(JsonResponse::build()
        .set_id(&session_id)
        .set_item(session_view(&session).await)
        .ok("OK"))
}

/// Closing drops a reply that is still in flight.
#[tracing::instrument(name = "Close chat window.", skip(registry))]
#[post("/{session}/close")]
pub async fn close_handler(
    path: web::Path<(String,)>,
    registry: web::Data<SessionRegistry>,
) -> Result<impl Responder> {
    let session_id = path.into_inner().0;
    let session = registry
        .get_or_create(&session_id)
        .await
        .map_err(chat_error::<SessionView>)?;

    session.close().await;

    Ok(JsonResponse::build()
        .set_id(&session_id)
        .set_item(session_view(&session).await)
        .ok("OK"))
}

#[tracing::instrument(name = "Toggle chat minimized.", skip(registry))]
#[post("/{session}/minimize")]
pub async fn minimize_handler(
    path: web::Path<(String,)>,
    registry: web::Data<SessionRegistry>,
) -> Result<impl Responder> {
    let session_id = path.into_inner().0;
    let session = registry
        .get_or_create(&session_id)
        .await
        .map_err(chat_error::<SessionView>)?;

    session.toggle_minimize().await;

    Ok(JsonResponse::build()
        .set_id(&session_id)
        .set_item(session_view(&session).await)
        .ok("OK"))
}
