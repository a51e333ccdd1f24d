//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`inventory`] - 原料库存接口
//! - [`menu`] - 菜单接口
//! - [`orders`] - 订单接口 (含结单)
//! - [`reports`] - 销售统计接口
//! - [`payload`] - JSON / 表单请求体解析
//!
//! 所有路径同时接受末尾斜杠 (`/menu` 与 `/menu/`)；未匹配的路径或方法返回 405。

pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod payload;
pub mod reports;

use axum::Router;
use axum::routing::MethodRouter;
use shared::error::{AppError, AppResult, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub use payload::Payload;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(inventory::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(reports::router())
}

/// Full application: routes, 405 fallback, state and HTTP layers
pub fn build_router(state: ServerState) -> Router {
    build_app()
        .fallback(no_such_method)
        .method_not_allowed_fallback(no_such_method)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Register `method_router` under `path` and `path/`
pub(crate) fn route_both(
    router: Router<ServerState>,
    path: &str,
    method_router: MethodRouter<ServerState>,
) -> Router<ServerState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

/// PUT bodies must name the record addressed by the path
pub(crate) fn ensure_path_matches(path_id: &str, body_id: &str, field: &str) -> Result<(), AppError> {
    if path_id != body_id {
        return Err(AppError::invalid_request(format!(
            "{field} in body ({body_id}) does not match path ({path_id})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Run a synchronous service call on the blocking thread pool
///
/// Services hold collection locks and do file I/O for their whole duration.
pub(crate) async fn blocking<T, F>(call: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call).await.map_err(|e| {
        tracing::error!("spawn_blocking join error: {e}");
        AppError::internal("service call failed")
    })?
}

async fn no_such_method() -> AppError {
    AppError::with_message(ErrorCode::MethodNotAllowed, "No such method")
}
