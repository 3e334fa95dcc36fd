//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::defaults::or_defaults;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult, MessageResponse};
use shared::models::{MenuItem, MenuItemCreate};

/// GET /api/menu - 获取菜单 (空时返回示例菜单)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_all().await?;
    Ok(Json(or_defaults(items)))
}

/// POST /api/menu - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload).await?;
    tracing::info!(id = %item.id, name = %item.name, "Menu item created");
    Ok(Json(item))
}

/// PUT /api/menu/{id} - 整体替换菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(&id, payload).await?;
    tracing::info!(id = %item.id, "Menu item updated");
    Ok(Json(item))
}

/// DELETE /api/menu/{id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = MenuItemRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found("Menu item not found"));
    }
    tracing::info!(id = %id, "Menu item deleted");
    Ok(Json(MessageResponse::ok("Menu item deleted")))
}
