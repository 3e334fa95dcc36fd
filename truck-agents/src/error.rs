use thiserror::Error;

/// Agent error types
#[derive(Debug, Error)]
pub enum AgentError {
    /// 配置缺失或无效，构造代理时返回
    #[error("Agent configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 上游模型服务返回非 2xx
    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
