//! Reports API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{PopularItem, TotalSales};

use crate::api::blocking;
use crate::core::ServerState;
use crate::reports::DEFAULT_TOP_N;

#[derive(Debug, Deserialize)]
pub struct PopularItemsQuery {
    pub top: Option<usize>,
}

/// GET /reports/total-sales - 总销售额
pub async fn total_sales(State(state): State<ServerState>) -> AppResult<Json<TotalSales>> {
    Ok(Json(blocking(move || state.reports.total_sales()).await?))
}

/// GET /reports/popular-items - 热销菜品
pub async fn popular_items(
    State(state): State<ServerState>,
    query: Result<Query<PopularItemsQuery>, QueryRejection>,
) -> AppResult<Json<Vec<PopularItem>>> {
    let Query(query) =
        query.map_err(|e| AppError::with_message(ErrorCode::InvalidRequest, e.body_text()))?;
    let top_n = query.top.unwrap_or(DEFAULT_TOP_N);
    Ok(Json(blocking(move || state.reports.popular_items(top_n)).await?))
}
