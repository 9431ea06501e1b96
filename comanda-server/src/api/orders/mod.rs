//! Order API 模块

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        // Customer status poll (must be before /{id} to avoid path conflicts)
        .route("/latest/{table}", get(handler::latest_for_table))
        .route("/{id}/status", put(handler::set_status))
}
