use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error carrying the HTTP status to surface plus the real
/// cause for logging.
///
/// The external contract is deliberately coarse: every error body is
/// `{success: false, error: <code>, message: <fixed string>}` with one
/// message per status code. The `error` field keeps the full `anyhow`
/// chain so each distinct failure cause stays traceable in the logs even
/// though clients see the same payload.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: Error,
}

impl ApiError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// The fixed user-visible message for this error's status code.
    pub fn message(&self) -> &'static str {
        match self.status {
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable resource",
            StatusCode::BAD_REQUEST => "Bad Request",
            _ => "Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, cause = ?self.error, "request failed");
        } else {
            tracing::warn!(status = %self.status, cause = ?self.error, "request failed");
        }

        let body = Json(json!({
            "success": false,
            "error": self.status.as_u16(),
            "message": self.message(),
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        ApiError::internal(err)
    }
}
