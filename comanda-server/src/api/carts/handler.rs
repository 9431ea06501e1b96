//! Cart API Handlers
//!
//! 顾客扫码后的购物车会话：创建、调整数量、下单。会话只存在于内存，
//! 下单时才把行项写入订单日志。

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::{ServerState, resources};
use crate::repo::{MenuRepository, OrderRepository};
use crate::utils::{AppError, AppResult};
use shared::models::{CartAdjust, CartCreate, CartView, Order};

/// POST /api/carts - 创建购物车会话
///
/// 桌号直接来自二维码参数，不校验桌台列表：删除桌台会重新编号，
/// 已印刷的二维码必须继续可用。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CartCreate>,
) -> AppResult<Json<CartView>> {
    if payload.table_number == 0 {
        return Err(AppError::validation("Table number must be positive"));
    }
    Ok(Json(state.carts.create(payload.table_number)))
}

/// GET /api/carts/:id - 获取购物车视图
pub async fn view(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CartView>> {
    Ok(Json(state.carts.view(&id)?))
}

/// POST /api/carts/:id/items - 按 ±delta 调整行项
///
/// 新行项的单价在此刻从菜单拷贝；已有行项保持加入时的价格。
pub async fn adjust(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CartAdjust>,
) -> AppResult<Json<CartView>> {
    let menu = MenuRepository::new(state.store.clone()).get();
    let menu_price = menu
        .find_dish(&payload.category, &payload.dish)
        .map(|d| d.price);

    let view = state
        .carts
        .adjust(&id, &payload.category, &payload.dish, payload.delta, menu_price)?;
    Ok(Json(view))
}

/// POST /api/carts/:id/order - 下单
///
/// 空购物车拒绝下单；写入订单日志成功后才清空购物车。
pub async fn place_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let (table_number, lines) = state.carts.lines(&id)?;

    let repo = OrderRepository::new(state.store.clone());
    let order = repo.append(table_number, lines)?;

    state.carts.clear(&id);

    // 广播同步通知
    state.broadcast_sync(resources::ORDERS, "created", &order.id, Some(&order));

    Ok(Json(order))
}
