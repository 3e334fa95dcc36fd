//! Location API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::defaults::or_defaults;
use crate::db::repository::LocationRepository;
use crate::utils::{AppError, AppResult, MessageResponse};
use shared::models::{Location, LocationCreate};

/// GET /api/locations - 获取停靠点 (空时返回示例数据)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Location>>> {
    let repo = LocationRepository::new(state.db.clone());
    let locations = repo.find_all().await?;
    Ok(Json(or_defaults(locations)))
}

/// POST /api/locations
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<LocationCreate>,
) -> AppResult<Json<Location>> {
    let repo = LocationRepository::new(state.db.clone());
    let location = repo.create(payload).await?;
    tracing::info!(id = %location.id, name = %location.name, "Location created");
    Ok(Json(location))
}

/// PUT /api/locations/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<LocationCreate>,
) -> AppResult<Json<Location>> {
    let repo = LocationRepository::new(state.db.clone());
    let location = repo.update(&id, payload).await?;
    Ok(Json(location))
}

/// DELETE /api/locations/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = LocationRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found("Location not found"));
    }
    tracing::info!(id = %id, "Location deleted");
    Ok(Json(MessageResponse::ok("Location deleted")))
}
