//! Sync API Handlers

use axum::{Json, extract::State};
use shared::models::SyncStatus;

use crate::core::ServerState;

/// GET /api/sync/status - 获取同步状态
///
/// 返回服务器 epoch 和各资源类型的当前版本号。页面按固定间隔轮询，
/// 版本号变化 (或 epoch 变化，说明服务重启过) 时重新读取对应文档。
pub async fn get_sync_status(State(state): State<ServerState>) -> Json<SyncStatus> {
    Json(state.sync_status())
}
