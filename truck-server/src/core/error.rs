use thiserror::Error;

/// 服务器生命周期错误 (启动、绑定端口、关闭)
///
/// 请求级错误见 [`crate::utils::AppError`]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database initialization failed: {0}")]
    Database(String),
}

/// 服务器生命周期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
