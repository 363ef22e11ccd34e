//! Message API routes

mod handler;

use crate::core::ServerState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/messages", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::send))
        .route("/conversation/{request_id}", get(handler::conversation))
}
