//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::{ServerState, resources};
use crate::repo::TableRepository;
use crate::utils::{AppError, AppResult};
use shared::models::DiningTable;

/// 桌台二维码目标响应
#[derive(Debug, Serialize)]
pub struct QrTargetResponse {
    pub table_number: u32,
    pub qr_target: String,
}

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> Json<Vec<DiningTable>> {
    let repo = TableRepository::new(state.store.clone(), &state.config);
    Json(repo.list())
}

/// POST /api/tables - 创建桌台 (编号自动分配)
pub async fn create(State(state): State<ServerState>) -> AppResult<Json<DiningTable>> {
    let repo = TableRepository::new(state.store.clone(), &state.config);
    let table = repo.add()?;

    // 广播同步通知
    let id = table.number.to_string();
    state.broadcast_sync(resources::TABLES, "created", &id, Some(&table));

    Ok(Json(table))
}

/// DELETE /api/tables/:number - 删除桌台 (剩余桌台重新密集编号)
pub async fn delete(
    State(state): State<ServerState>,
    Path(number): Path<u32>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = TableRepository::new(state.store.clone(), &state.config);
    let tables = repo.delete(number)?;

    // 广播同步通知 (重新编号影响整个列表，带上全量数据)
    let id = number.to_string();
    state.broadcast_sync(resources::TABLES, "deleted", &id, Some(&tables));

    Ok(Json(tables))
}

/// GET /api/tables/:number/qr - 获取桌台二维码目标地址
pub async fn qr_target(
    State(state): State<ServerState>,
    Path(number): Path<u32>,
) -> AppResult<Json<QrTargetResponse>> {
    let repo = TableRepository::new(state.store.clone(), &state.config);
    let table = repo
        .find(number)
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", number)))?;

    Ok(Json(QrTargetResponse {
        table_number: table.number,
        qr_target: table.qr_target,
    }))
}
