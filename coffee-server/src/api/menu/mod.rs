//! Menu API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /menu | POST | 新增菜品 |
//! | /menu | GET | 全部菜品 |
//! | /menu/{id} | GET | 单个菜品 |
//! | /menu/{id} | PUT | 修改菜品 |
//! | /menu/{id} | DELETE | 删除菜品 |

mod handler;

use axum::Router;
use axum::routing::{get, post};

use super::route_both;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let router = route_both(
        Router::new(),
        "/menu",
        post(handler::create).get(handler::list),
    );
    route_both(
        router,
        "/menu/{id}",
        get(handler::get_by_id)
            .put(handler::update)
            .delete(handler::delete),
    )
}
