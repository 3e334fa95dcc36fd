//! 统一错误处理
//!
//! # 错误码规范
//!
//! | 错误码 | HTTP | 说明 |
//! |--------|------|------|
//! | E0003 | 404 | 资源不存在 |
//! | E9002 | 500 | 数据库错误 |
//!
//! 请求体格式错误由 axum `Json` 提取器直接拒绝 (400/415/422)，不经过这里。
//! 代理网关不使用这些错误：代理失败总是以 `success: false` 的 200 响应返回。
//!
//! # 使用示例
//!
//! ```ignore
//! Err(AppError::not_found("Menu item not found"))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::repository::RepoError;

/// 错误响应体
///
/// ```json
/// { "code": "E0003", "message": "Menu item not found" }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),
}

impl AppError {
    /// HTTP status and error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "E0003"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "E9002"),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            AppError::NotFound(msg) => msg.clone(),
            // 5xx 只记录日志，不向客户端暴露细节
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
        };

        let body = Json(ErrorBody {
            code: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::not_found("x").status_and_code().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::database("x").status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "E9002")
        );
    }

    #[test]
    fn test_repo_error_conversion() {
        let err: AppError = RepoError::NotFound("Location not found".to_string()).into();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Location not found"));

        let err: AppError = RepoError::Database("boom".to_string()).into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_into_response_status() {
        let resp = AppError::not_found("Menu item not found").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = AppError::database("secret detail").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
