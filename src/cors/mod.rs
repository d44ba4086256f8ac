//! Cross-origin allow-list enforcement.
//!
//! Requests carrying an `Origin` header outside the allow-list are rejected before they
//! reach a handler. Requests without `Origin` (curl, server-to-server) always pass.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::errors::AppError;

/// Origin guard layer function that takes the allow-list as a parameter.
pub async fn origin_guard_layer(
    allowed_origins: Arc<Vec<String>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(origin) = request.headers().get(header::ORIGIN) else {
        return next.run(request).await;
    };

    let permitted = origin
        .to_str()
        .map(|origin| is_origin_allowed(&allowed_origins, origin))
        .unwrap_or(false);

    if permitted {
        next.run(request).await
    } else {
        tracing::warn!(origin = ?origin, "rejected cross-origin request");
        AppError::CrossOriginRejected("Not allowed by CORS".to_string()).into_response()
    }
}

/// Exact, case-sensitive match against the allow-list.
pub fn is_origin_allowed(allowed_origins: &[String], origin: &str) -> bool {
    allowed_origins.iter().any(|allowed| allowed == origin)
}

/// CORS response headers for the allowed origins.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            // A wildcard can't be mixed into an explicit list
            Ok(value) if value == "*" => {
                tracing::warn!("Ignoring wildcard CORS origin");
                None
            }
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
