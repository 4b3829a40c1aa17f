use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::DataError;

/// API error type with HTTP status code and optional message
///
/// Errors without a message are rendered as a bare status with no body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: Option<String>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
        }
    }

    /// Creates a 404 Not Found error with an empty body
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: None,
        }
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.message {
            Some(message) => {
                let body = Json(json!({
                    "error": message
                }));

                (self.status, body).into_response()
            }
            None => self.status.into_response(),
        }
    }
}

impl From<DataError> for ApiError {
    fn from(error: DataError) -> Self {
        tracing::error!(error = %error, "Request failed in data layer");
        Self::internal_server_error(error.to_string())
    }
}
