//! Order API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /orders | POST | 下单 (只校验库存) |
//! | /orders | GET | 全部订单 |
//! | /orders/{id} | GET | 单个订单 |
//! | /orders/{id} | PUT | 修改订单 |
//! | /orders/{id} | DELETE | 删除订单 |
//! | /orders/{id}/close | POST | 结单并扣减库存 |

mod handler;

use axum::Router;
use axum::routing::{get, post};

use super::route_both;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let router = route_both(
        Router::new(),
        "/orders",
        post(handler::create).get(handler::list),
    );
    let router = route_both(
        router,
        "/orders/{id}",
        get(handler::get_by_id)
            .put(handler::update)
            .delete(handler::delete),
    );
    route_both(router, "/orders/{id}/close", post(handler::close))
}
