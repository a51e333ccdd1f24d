//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::AppResult;
use shared::models::{Order, OrderCreate, OrderUpdate};

use crate::api::{Payload, blocking, ensure_path_matches};
use crate::core::ServerState;

/// POST /orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    Payload(request): Payload<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = blocking(move || state.fulfillment.create_order(request)).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders - 获取全部订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(blocking(move || state.orders.get_all()).await?))
}

/// GET /orders/{id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(blocking(move || state.orders.get_by_id(&id)).await?))
}

/// PUT /orders/{id} - 修改订单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(update): Payload<OrderUpdate>,
) -> AppResult<Json<Order>> {
    if let Some(body_id) = update.order_id.as_deref().filter(|v| !v.is_empty()) {
        ensure_path_matches(&id, body_id, "order_id")?;
    }
    Ok(Json(blocking(move || state.orders.modify(&id, update)).await?))
}

/// DELETE /orders/{id} - 删除订单 (不退回库存)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    blocking(move || state.orders.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /orders/{id}/close - 结单
pub async fn close(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(blocking(move || state.fulfillment.close_order(&id)).await?))
}
