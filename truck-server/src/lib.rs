//! Food Truck Server - 餐车管理后端 + AI 代理网关
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (菜单、停靠点、餐车信息、状态上报)
//! - **HTTP API** (`api`): `/api` 下的 JSON 接口
//! - **代理网关** (`services/agent_gateway`): 把聊天和搜索请求转交给 `truck-agents`
//!
//! # 模块结构
//!
//! ```text
//! truck-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (repository + 示例数据)
//! ├── services/      # HTTP 服务、代理网关
//! ├── middleware/    # 请求日志
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use services::{AgentGateway, build_router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境：加载 `.env`、读取配置、创建工作目录、初始化日志
pub fn setup_environment() -> Result<Config, ServerError> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
  _____               _   _____                 _
 |  ___|__   ___   __| | |_   _| __ _   _  ___| | __
 | |_ / _ \ / _ \ / _` |   | || '__| | | |/ __| |/ /
 |  _| (_) | (_) | (_| |   | || |  | |_| | (__|   <
 |_|  \___/ \___/ \__,_|   |_||_|   \__,_|\___|_|\_\
    "#
    );
}
