//! HTTP error responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use serde_json::json;
use tracing::warn;

/// Request failures that end in a non-2xx response.
///
/// Game rule violations (not started, already over, invalid guess) are not
/// errors at this level: they are reported in a 200 body with
/// `success: false`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    /// A required field was missing or empty, or the body was not valid JSON
    /// of the expected shape.
    #[display("{}", _0)]
    BadRequest(#[error(not(source))] String),

    /// The session or route does not exist.
    #[display("{}", _0)]
    NotFound(#[error(not(source))] String),

    /// The route exists but not for this method.
    #[display("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, error = %self, "Request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
