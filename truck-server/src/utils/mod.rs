//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 请求级错误类型
//! - [`MessageResponse`] - `{success, message}` 确认响应
//! - 日志初始化

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, ErrorBody};
pub use result::AppResult;

/// Acknowledgement body for operations without a resource payload
///
/// ```json
/// { "success": true, "message": "Menu item deleted" }
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
