//! Inventory API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /inventory | POST | 新增原料 |
//! | /inventory | GET | 全部原料 |
//! | /inventory/{id} | GET | 单个原料 |
//! | /inventory/{id} | PUT | 修改原料 |
//! | /inventory/{id} | DELETE | 删除原料 |

mod handler;

use axum::Router;
use axum::routing::{get, post};

use super::route_both;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let router = route_both(
        Router::new(),
        "/inventory",
        post(handler::create).get(handler::list),
    );
    route_both(
        router,
        "/inventory/{id}",
        get(handler::get_by_id)
            .put(handler::update)
            .delete(handler::delete),
    )
}
