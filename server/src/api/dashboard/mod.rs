//! Dashboard API routes

mod handler;

use crate::core::ServerState;
use axum::{Router, routing::get};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/dashboard/stats", get(handler::stats))
}
