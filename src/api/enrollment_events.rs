//! Enrollment event API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use super::{records, ApiResult};
use crate::models::{Collection, Record};
use crate::AppState;

const COLLECTION: Collection = Collection::EnrollmentEvents;

/// GET /api/enrollmentEvents - List all enrollment events.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<Record>>> {
    records::list(&state, COLLECTION).await
}

/// GET /api/enrollmentEvents/:id - Get a single enrollment event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Record>> {
    records::get(&state, COLLECTION, &id).await
}

/// POST /api/enrollmentEvents - Create a new enrollment event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    records::create(&state, COLLECTION, body).await
}

/// PUT /api/enrollmentEvents/:id - Update an enrollment event.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> ApiResult<Json<Record>> {
    records::update(&state, COLLECTION, &id, body).await
}

/// DELETE /api/enrollmentEvents/:id - Delete an enrollment event.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    records::delete(&state, COLLECTION, &id).await
}
