//! Dish API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::{ServerState, resources};
use crate::repo::MenuRepository;
use crate::utils::AppResult;
use shared::models::{Dish, DishCreate};

/// POST /api/categories/:category/dishes - 添加菜品
pub async fn create(
    State(state): State<ServerState>,
    Path(category): Path<String>,
    Json(payload): Json<DishCreate>,
) -> AppResult<Json<Dish>> {
    let repo = MenuRepository::new(state.store.clone());
    let dish = repo.add_dish(&category, payload)?;

    // 广播同步通知
    let id = format!("{}/{}", category, dish.name);
    state.broadcast_sync(resources::MENU, "updated", &id, Some(&dish));

    Ok(Json(dish))
}

/// DELETE /api/categories/:category/dishes/:dish - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path((category, dish)): Path<(String, String)>,
) -> AppResult<Json<bool>> {
    let repo = MenuRepository::new(state.store.clone());
    let result = repo.delete_dish(&category, &dish)?;

    // 广播同步通知
    if result {
        let id = format!("{}/{}", category, dish);
        state.broadcast_sync::<()>(resources::MENU, "deleted", &id, None);
    }

    Ok(Json(result))
}
