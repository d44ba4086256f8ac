//! News API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use super::{records, ApiResult};
use crate::models::{Collection, Record};
use crate::AppState;

/// GET /api/news - List all news items.
pub async fn list_news(State(state): State<AppState>) -> ApiResult<Json<Vec<Record>>> {
    records::list(&state, Collection::News).await
}

/// GET /api/news/:id - Get a single news item.
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Record>> {
    records::get(&state, Collection::News, &id).await
}

/// POST /api/news - Create a new news item.
pub async fn create_news(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    records::create(&state, Collection::News, body).await
}

/// PUT /api/news/:id - Update a news item.
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> ApiResult<Json<Record>> {
    records::update(&state, Collection::News, &id, body).await
}

/// DELETE /api/news/:id - Delete a news item.
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    records::delete(&state, Collection::News, &id).await
}
