//! Offer API routes

mod handler;

use crate::core::ServerState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/offers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        // Own-offers listing (must be before parameterized routes)
        .route("/my", get(handler::list_mine))
        .route("/request/{id}", get(handler::list_for_request))
        .route("/{id}/accept", put(handler::accept))
}
