//! Category API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // 公开路由, 发布表单在登录前就需要拿到分类
    Router::new().route("/api/categories", get(handler::list))
}
