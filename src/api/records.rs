//! Record operations shared by every collection route group.

use axum::{http::StatusCode, Json};
use serde_json::{Map, Value};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{Collection, Record};
use crate::AppState;

pub(super) async fn list(state: &AppState, collection: Collection) -> ApiResult<Json<Vec<Record>>> {
    let records = state.repo.list(collection).await?;
    Ok(Json(records))
}

pub(super) async fn get(
    state: &AppState,
    collection: Collection,
    id: &str,
) -> ApiResult<Json<Record>> {
    match state.repo.get(collection, id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::NotFound(
            collection.not_found_message().to_string(),
        )),
    }
}

pub(super) async fn create(
    state: &AppState,
    collection: Collection,
    body: Map<String, Value>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let record = state.repo.create(collection, body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub(super) async fn update(
    state: &AppState,
    collection: Collection,
    id: &str,
    body: Map<String, Value>,
) -> ApiResult<Json<Record>> {
    let record = state.repo.update(collection, id, body).await?;
    Ok(Json(record))
}

pub(super) async fn delete(
    state: &AppState,
    collection: Collection,
    id: &str,
) -> ApiResult<StatusCode> {
    state.repo.delete(collection, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
