use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::commands;
use crate::ports::store;

/// Failure taxonomy for the HTTP layer.
///
/// Wraps command errors so route handlers can use `?`, and maps every failure
/// onto the service's wire envelope.
#[derive(Debug)]
pub enum ApiError {
    /// Required request-body fields were absent or null.
    MissingFields,
    /// A command failed.
    Command(commands::Error),
}

impl From<commands::Error> for ApiError {
    fn from(err: commands::Error) -> Self {
        ApiError::Command(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Missing memberId or amountPaid in request body",
            ),
            ApiError::Command(commands::Error::Store(store::Error::MemberNotFound(_))) => {
                (StatusCode::BAD_REQUEST, "ไม่พบสมาชิก")
            }
            // Anything else is unexpected: log it, never leak it to the client
            ApiError::Command(err) => {
                tracing::error!(error = ?err, "unexpected error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        let body = serde_json::json!({
            "status": status.as_str(),
            "msg": msg,
        });

        (status, Json(body)).into_response()
    }
}
