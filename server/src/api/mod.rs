//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 注册/登录/个人资料
//! - [`categories`] - 市场分类 (固定清单)
//! - [`requests`] - 采购请求
//! - [`offers`] - 报价与接受
//! - [`messages`] - 请求内会话
//! - [`dashboard`] - 角色统计

pub mod convert;

pub mod auth;
pub mod health;

// Marketplace API
pub mod categories;
pub mod dashboard;
pub mod messages;
pub mod offers;
pub mod requests;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
