//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查和 `/api/` 问候
//! - [`status_checks`] - 客户端状态上报
//! - [`food_truck_info`] - 餐车信息 (单例)
//! - [`menu`] - 菜单管理接口
//! - [`locations`] - 停靠点管理接口
//! - [`agents`] - AI 代理网关

pub mod agents;
pub mod food_truck_info;
pub mod health;
pub mod locations;
pub mod menu;
pub mod status_checks;

// Re-export common types for handlers
pub use crate::utils::{AppResult, MessageResponse};
