use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::error;

/// JSON error response: always a `message`, plus an `error` detail when there is one.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Self {
        Self { status, message: message.into(), error }
    }

    /// Map a failed service call. `message` is the fixed text for the operation,
    /// e.g. "Error adding blog"; not-found carries its own message.
    pub fn from_service(e: ServiceError, message: &str) -> Self {
        match e {
            ServiceError::Validation(detail) => Self::new(StatusCode::BAD_REQUEST, message, Some(detail)),
            ServiceError::NotFound(what) => Self::new(StatusCode::NOT_FOUND, what, None),
            ServiceError::Db(detail) => {
                error!(error = %detail, "{message}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, Some(detail))
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request body", Some(rejection.body_text()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { message: &self.message, error: self.error.as_deref() };
        (self.status, Json(body)).into_response()
    }
}
