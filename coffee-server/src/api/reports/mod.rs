//! Reports API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /reports/total-sales | GET | 已结订单总销售额 |
//! | /reports/popular-items?top=N | GET | 销量前 N 的菜品 (默认 3) |

mod handler;

use axum::Router;
use axum::routing::get;

use super::route_both;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let router = route_both(Router::new(), "/reports/total-sales", get(handler::total_sales));
    route_both(router, "/reports/popular-items", get(handler::popular_items))
}
