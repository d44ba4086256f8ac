//! Error handling module for the school-site backend.
//!
//! Provides a single error type with mapping to HTTP status codes. Error bodies are plain
//! text; storage failures never leak their details to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Requested record is absent from its collection
    NotFound(String),
    /// Collection can't take another record (id space exhausted)
    Conflict(String),
    /// Backing document missing, unreadable, malformed or unwritable
    Storage(String),
    /// Request origin is not in the allow-list
    CrossOriginRejected(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CrossOriginRejected(_) => StatusCode::FORBIDDEN,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) => msg,
            AppError::Conflict(msg) => msg,
            AppError::Storage(msg) => msg,
            AppError::CrossOriginRejected(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("JSON error: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "storage error");
                (status, "Internal Server Error").into_response()
            }
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::CrossOriginRejected(msg) => {
                (status, msg).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("News not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Storage("disk full".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::CrossOriginRejected("Not allowed by CORS".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_json_error_maps_to_storage() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_storage_response_hides_details() {
        let response = AppError::Storage("secret path".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(body, "Internal Server Error");
        assert!(!body.contains("secret path"));
    }

    #[tokio::test]
    async fn test_conflict_response() {
        let response = AppError::Conflict("No ids left in news".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"No ids left in news");
    }
}
