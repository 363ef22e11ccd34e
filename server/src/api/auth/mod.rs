//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Build authentication router
/// - /api/register, /api/login: public (no auth required)
/// - /api/profile: protected (handled by global require_auth middleware)
pub fn router() -> Router<ServerState> {
    Router::new()
        // Public routes - listed in the auth middleware allowlist
        .route("/api/register", post(handler::register))
        .route("/api/login", post(handler::login))
        // Protected route - requires authentication
        .route("/api/profile", get(handler::profile))
}
