//! Order API Handlers
//!
//! 后厨轮询订单列表并切换状态；顾客轮询本桌最新订单的状态。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::{ServerState, resources};
use crate::repo::OrderRepository;
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderStatusUpdate};

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// Restrict the listing to one table
    pub table: Option<u32>,
}

/// GET /api/orders - 订单列表 (waiting 在前，其余按时间倒序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> Json<Vec<Order>> {
    let repo = OrderRepository::new(state.store.clone());
    Json(repo.list(query.table))
}

/// GET /api/orders/latest/:table - 本桌最新订单 (顾客状态轮询)
pub async fn latest_for_table(
    State(state): State<ServerState>,
    Path(table): Path<u32>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.store.clone());
    repo.latest_for_table(table)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("No orders for table {}", table)))
}

/// PUT /api/orders/:id/status - 设置订单状态 (后厨操作，幂等)
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.store.clone());
    let (order, changed) = repo.set_status(&id, payload.status)?;

    // 广播同步通知 (重复设置同一状态不产生通知)
    if changed {
        state.broadcast_sync(resources::ORDERS, "updated", &id, Some(&order));
    }

    Ok(Json(order))
}
