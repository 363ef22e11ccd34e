//! Soko Server - 反向市场后端
//!
//! # 架构概述
//!
//! 本模块是 Soko Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! 客户发布采购请求, 卖家提交报价, 双方在请求内协商并由客户接受
//! 唯一一份报价。
//!
//! # 模块结构
//!
//! ```text
//! server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、提取器、中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由聚合和中间件栈
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层 (模型 + 仓储)
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   _____       __
  / ___/____  / /______
  \__ \/ __ \/ //_/ __ \
 ___/ / /_/ / ,< / /_/ /
/____/\____/_/|_|\____/
    "#
    );
}
