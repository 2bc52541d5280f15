use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// An unexpected failure. Only `message` reaches the client; `cause` is logged.
    #[error("{message}: {cause:#}")]
    Failed {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl AppError {
    /// Joins collected validation messages into a single 400 response.
    pub fn invalid(errors: Vec<String>) -> Self {
        AppError::Validation(errors.join(", "))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// JSON body extractor whose rejections render as `AppError`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Failed { message, cause } => {
                tracing::error!("{message}: {cause:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Attaches the client-facing failure message to a fallible store call.
pub trait OrFail<T> {
    fn or_fail(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn or_fail(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Failed {
            message,
            cause: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_failed_hides_cause() {
        let result: Result<(), anyhow::Error> = Err(anyhow::anyhow!("connection reset"));
        let err = result.or_fail("Recommendation failed").unwrap_err();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Recommendation failed" }));
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let (status, body) = render(AppError::Validation("Invalid profileId".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid profileId");
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) = render(AppError::NotFound("Profile not found".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Profile not found");
    }
}
