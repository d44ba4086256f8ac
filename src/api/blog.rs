//! Aggregate blog endpoint.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::Document;
use crate::AppState;

/// GET /api/blog - Get the whole document, unknown top-level fields included.
pub async fn get_blog(State(state): State<AppState>) -> ApiResult<Json<Document>> {
    let document = state.repo.get_document().await?;
    Ok(Json(document))
}
