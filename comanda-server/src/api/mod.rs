//! API 路由模块
//!
//! # 结构
//!
//! - [`menu`] - 工作菜单读取与确认快照
//! - [`categories`] - 分类管理接口
//! - [`dishes`] - 菜品管理接口
//! - [`tables`] - 桌台管理接口 (含二维码目标)
//! - [`carts`] - 购物车会话接口
//! - [`orders`] - 订单与后厨状态接口
//! - [`sync`] - 轮询同步接口
//! - [`health`] - 健康检查

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod carts;
pub mod categories;
pub mod dishes;
pub mod health;
pub mod menu;
pub mod orders;
pub mod sync;
pub mod tables;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(menu::router())
        .merge(categories::router())
        .merge(dishes::router())
        .merge(tables::router())
        .merge(carts::router())
        .merge(orders::router())
        .merge(sync::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware
pub fn build_app() -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - the admin/menu/kitchen pages are served from anywhere
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
