//! Application error type mapping to HTTP status codes and the widget's
//! `{error, details?}` body shape.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use loops_types::error::{ContactError, RelayError};

/// Body text for contact failures that are not validation errors.
const CONTACT_FAILURE: &str = "Contact error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Relay(RelayError),
    Contact(ContactError),
    /// `/chat` body that could not be read (bad JSON, unknown role or
    /// language mode). Reported like a relay failure.
    ChatBody(String),
    /// Any other failure. Only the generic message reaches the client.
    Internal(&'static str),
}

impl AppError {
    pub fn chat_body(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "rejected chat body");
        AppError::ChatBody(rejection.body_text())
    }

    pub fn contact_body(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "rejected contact body");
        AppError::Internal(CONTACT_FAILURE)
    }
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e)
    }
}

impl From<ContactError> for AppError {
    fn from(e: ContactError) -> Self {
        AppError::Contact(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Relay(e @ RelayError::Upstream(details)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": e.to_string(), "details": details }),
            ),
            AppError::ChatBody(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": details, "details": details }),
            ),
            AppError::Contact(e @ ContactError::MissingFields) => {
                (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
            }
            AppError::Contact(ContactError::Sink(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": CONTACT_FAILURE }),
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn upstream_failure_is_500_with_unredacted_message() {
        let (status, body) = render(RelayError::Upstream("Incorrect API key provided".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "completion API failed: Incorrect API key provided");
        assert_eq!(body["details"], "Incorrect API key provided");
    }

    #[tokio::test]
    async fn missing_fields_is_400() {
        let (status, body) = render(ContactError::MissingFields.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing fields" }));
    }

    #[tokio::test]
    async fn sink_failure_is_generic_500() {
        let (status, body) = render(ContactError::Sink("smtp down".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Contact error" }));
    }

    #[tokio::test]
    async fn chat_body_failure_is_500_with_details() {
        let (status, body) = render(AppError::ChatBody("missing field `messages`".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "missing field `messages`");
        assert_eq!(body["details"], "missing field `messages`");
    }

    #[tokio::test]
    async fn internal_error_exposes_only_generic_message() {
        let (status, body) = render(AppError::Internal("Contact error")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Contact error" }));
    }
}
