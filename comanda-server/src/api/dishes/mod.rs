//! Dish API 模块
//!
//! 菜品以 分类名 + 菜名 定位，路由挂在分类路径下。

mod handler;

use axum::{
    Router,
    routing::{delete, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/categories/{category}/dishes", post(handler::create))
        .route(
            "/api/categories/{category}/dishes/{dish}",
            delete(handler::delete),
        )
}
