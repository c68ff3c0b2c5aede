use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_derive::Serialize;

/// Envelope for the session routes.
#[derive(Serialize, Debug)]
pub struct JsonResponse<T> {
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
}

#[derive(Serialize, Default)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub(crate) fn set_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    fn to_json_response(self, msg: String) -> JsonResponse<T> {
        JsonResponse {
            message: msg,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub(crate) fn ok<I: Into<String>>(self, msg: I) -> web::Json<JsonResponse<T>> {
        web::Json(self.to_json_response(msg.into()))
    }

    fn error<I: Into<String>>(self, status: StatusCode, msg: I) -> actix_web::Error {
        let msg: String = msg.into();
        let response = HttpResponse::build(status).json(self.to_json_response(msg.clone()));
        InternalError::from_response(msg, response).into()
    }

    pub(crate) fn bad_request<I: Into<String>>(self, msg: I) -> actix_web::Error {
        self.error(StatusCode::BAD_REQUEST, msg)
    }

    pub(crate) fn conflict<I: Into<String>>(self, msg: I) -> actix_web::Error {
        self.error(StatusCode::CONFLICT, msg)
    }

    pub(crate) fn internal_server_error<I: Into<String>>(self, msg: I) -> actix_web::Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize + Default,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}
