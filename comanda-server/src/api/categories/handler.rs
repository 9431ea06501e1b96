//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::{ServerState, resources};
use crate::repo::MenuRepository;
use crate::utils::AppResult;
use shared::models::{CategoryCreate, MenuDocument};

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> Json<Vec<String>> {
    let repo = MenuRepository::new(state.store.clone());
    Json(repo.get().categories)
}

/// POST /api/categories - 创建分类 (带空菜品列表)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<MenuDocument>> {
    let name = payload.name.trim().to_string();
    let repo = MenuRepository::new(state.store.clone());
    let doc = repo.add_category(payload)?;

    // 广播同步通知
    state.broadcast_sync(resources::MENU, "created", &name, Some(&doc));

    Ok(Json(doc))
}

/// DELETE /api/categories/:name - 删除分类及其全部菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuRepository::new(state.store.clone());
    repo.delete_category(&name)?;

    // 广播同步通知
    state.broadcast_sync::<()>(resources::MENU, "deleted", &name, None);

    Ok(Json(true))
}
