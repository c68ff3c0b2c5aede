pub mod delete;
pub mod get;
pub mod send;
pub mod state;

pub use delete::*;
pub use get::*;
pub use send::*;
pub use state::*;

use crate::chatbot::ChatSession;
use crate::errors::ChatError;
use crate::helpers::JsonResponse;
use crate::models::SessionView;

pub(crate) fn chat_error<T>(err: ChatError) -> actix_web::Error
where
    T: serde::Serialize + Default,
{
    match err {
        ChatError::Validation(msg) => JsonResponse::<T>::build().bad_request(msg),
        ChatError::SessionBusy => JsonResponse::<T>::build().conflict(err.to_string()),
        err => {
            tracing::error!(error = %err, "Chat request failed");
            JsonResponse::<T>::build().internal_server_error("Internal error")
        }
    }
}

pub(crate) async fn session_view(session: &ChatSession) -> SessionView {
    SessionView {
        session_id: session.id().to_string(),
        state: session.snapshot().await,
        has_unread: session.has_unread().await,
    }
}
