//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::AppResult;
use shared::models::InventoryItem;

use crate::api::{Payload, blocking, ensure_path_matches};
use crate::core::ServerState;

/// POST /inventory - 新增原料
pub async fn create(
    State(state): State<ServerState>,
    Payload(item): Payload<InventoryItem>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    let item = blocking(move || state.inventory.add(item)).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /inventory - 获取全部原料
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    Ok(Json(blocking(move || state.inventory.get_all()).await?))
}

/// GET /inventory/{id} - 获取单个原料
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(blocking(move || state.inventory.get_by_id(&id)).await?))
}

/// PUT /inventory/{id} - 修改原料
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(item): Payload<InventoryItem>,
) -> AppResult<Json<InventoryItem>> {
    ensure_path_matches(&id, &item.ingredient_id, "ingredient_id")?;
    Ok(Json(blocking(move || state.inventory.modify(item)).await?))
}

/// DELETE /inventory/{id} - 删除原料
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    blocking(move || state.inventory.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
