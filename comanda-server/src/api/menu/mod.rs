//! Menu API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_menu))
        .route("/confirm", post(handler::confirm))
        .route("/confirmed", get(handler::get_confirmed))
}
