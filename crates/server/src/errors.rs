use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body returned by every handler: `{ "error": <title>, "code": <code>, "message": <detail> }`.
#[derive(Debug, Error)]
#[error("{status}: {title}")]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub code: u16,
    pub message: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, code: u16, message: Option<String>) -> Self {
        Self { status, title, code, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, code = self.code, message = ?self.message, "request failed");
        }
        let body = ErrorBody { error: self.title, code: self.code, message: self.message.as_deref() };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let code = e.code();
        let msg = Some(e.to_string());
        let (status, title) = match e {
            ServiceError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Validation Error"),
            ServiceError::Conflict(_) => (StatusCode::CONFLICT, "Conflict"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        JsonApiError::new(status, title, code, msg)
    }
}

/// Any body that cannot be decoded into the typed input is a validation failure.
impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self {
        ServiceError::Validation(e.body_text()).into()
    }
}

/// Path ids that are not integers cannot match any row.
impl From<PathRejection> for JsonApiError {
    fn from(e: PathRejection) -> Self {
        ServiceError::NotFound(e.body_text()).into()
    }
}
