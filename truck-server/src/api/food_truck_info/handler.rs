//! Food Truck Info API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::defaults::default_food_truck_info;
use crate::db::repository::FoodTruckInfoRepository;
use crate::utils::AppResult;
use shared::models::{FoodTruckInfo, FoodTruckInfoCreate};

/// Get the saved info, or the built-in default (not persisted)
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<FoodTruckInfo>> {
    let repo = FoodTruckInfoRepository::new(state.db.clone());
    let info = repo.get().await?.unwrap_or_else(default_food_truck_info);
    Ok(Json(info))
}

/// Create-or-replace the singleton
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<FoodTruckInfoCreate>,
) -> AppResult<Json<FoodTruckInfo>> {
    let repo = FoodTruckInfoRepository::new(state.db.clone());
    let info = repo.upsert(payload).await?;
    tracing::info!(id = %info.id, name = %info.name, "Food truck info updated");
    Ok(Json(info))
}
