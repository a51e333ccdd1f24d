//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::AppResult;
use shared::models::MenuItem;

use crate::api::{Payload, blocking, ensure_path_matches};
use crate::core::ServerState;

/// POST /menu - 新增菜品
pub async fn create(
    State(state): State<ServerState>,
    Payload(item): Payload<MenuItem>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let item = blocking(move || state.menu.add(item)).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /menu - 获取全部菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(blocking(move || state.menu.get_all()).await?))
}

/// GET /menu/{id} - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(blocking(move || state.menu.get_by_id(&id)).await?))
}

/// PUT /menu/{id} - 修改菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(item): Payload<MenuItem>,
) -> AppResult<Json<MenuItem>> {
    ensure_path_matches(&id, &item.product_id, "product_id")?;
    Ok(Json(blocking(move || state.menu.modify(item)).await?))
}

/// DELETE /menu/{id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    blocking(move || state.menu.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
