//! Buy Request API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/requests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Own-requests listing (must be before /{id} to avoid path conflicts)
        .route("/my", get(handler::list_mine))
        .route("/{id}", get(handler::get_by_id))
}
