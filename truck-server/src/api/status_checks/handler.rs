//! Status Check API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::StatusCheckRepository;
use crate::utils::AppResult;
use shared::models::{StatusCheck, StatusCheckCreate};

/// GET /api/status-checks
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<StatusCheck>>> {
    let repo = StatusCheckRepository::new(state.db.clone());
    let checks = repo.find_all().await?;
    Ok(Json(checks))
}

/// POST /api/status-checks
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StatusCheckCreate>,
) -> AppResult<Json<StatusCheck>> {
    let repo = StatusCheckRepository::new(state.db.clone());
    let check = repo.create(payload).await?;
    tracing::debug!(client = %check.client_name, "Status check recorded");
    Ok(Json(check))
}
