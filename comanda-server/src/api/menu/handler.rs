//! Menu API Handlers

use axum::{Json, extract::State};

use crate::core::{ServerState, resources};
use crate::repo::MenuRepository;
use crate::utils::{AppError, AppResult};
use shared::models::MenuDocument;

/// GET /api/menu - 获取工作菜单 (从未写入时返回空文档)
pub async fn get_menu(State(state): State<ServerState>) -> Json<MenuDocument> {
    let repo = MenuRepository::new(state.store.clone());
    Json(repo.get())
}

/// POST /api/menu/confirm - 确认菜单 (生成快照)
pub async fn confirm(State(state): State<ServerState>) -> AppResult<Json<MenuDocument>> {
    let repo = MenuRepository::new(state.store.clone());
    let doc = repo.confirm()?;

    // 广播同步通知
    state
        .broadcast_sync(resources::MENU, "confirmed", "menu", Some(&doc));

    Ok(Json(doc))
}

/// GET /api/menu/confirmed - 获取确认快照
pub async fn get_confirmed(State(state): State<ServerState>) -> AppResult<Json<MenuDocument>> {
    let repo = MenuRepository::new(state.store.clone());
    repo.get_confirmed()
        .map(Json)
        .ok_or_else(|| AppError::not_found("Confirmed menu not available yet"))
}
