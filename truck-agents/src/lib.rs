//! Truck Agents - LLM 对话 / 搜索代理
//!
//! 服务端只通过一个很窄的契约使用这些代理：
//!
//! ```text
//! execute(prompt, use_tools) -> AgentResponse { success, content, metadata, error }
//! capabilities()             -> Vec<String>
//! ```
//!
//! # 模块结构
//!
//! ```text
//! truck-agents/src/
//! ├── agent.rs    # Agent trait + AgentResponse
//! ├── config.rs   # AgentConfig (环境变量)
//! ├── client.rs   # OpenAI 兼容的 chat/completions 客户端
//! ├── chat.rs     # ChatAgent
//! ├── search.rs   # SearchAgent (可选 web 搜索工具)
//! └── error.rs    # AgentError
//! ```

pub mod agent;
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod search;

pub use agent::{Agent, AgentResponse, Metadata};
pub use chat::ChatAgent;
pub use config::AgentConfig;
pub use error::{AgentError, AgentResult};
pub use search::{SearchAgent, search_prompt};
