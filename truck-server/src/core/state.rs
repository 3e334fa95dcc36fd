//! 服务器状态
//!
//! [`ServerState`] 在所有请求处理器之间共享 (Clone 成本很低：
//! 数据库句柄和代理网关内部都是 Arc)。

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, ServerError};
use crate::db::DbService;
use crate::services::AgentGateway;

/// 服务器状态 - 持有所有服务的共享引用
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config).await?;
/// let db = state.get_db();
/// let reply = state.agents.chat(request).await;
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// AI 代理网关
    pub agents: AgentGateway,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替；测试中用于注入内存数据库和假代理
    pub fn new(config: Config, db: Surreal<Db>, agents: AgentGateway) -> Self {
        Self { config, db, agents }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/truck.db)
    /// 3. 代理网关 (代理本身延迟到首次请求时构造)
    pub async fn initialize(config: &Config) -> Result<Self, ServerError> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("truck.db");
        let db_path_str = db_path.to_string_lossy();

        let db_service = DbService::new(&db_path_str, &config.db_namespace, &config.db_name)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        let agents = AgentGateway::from_config(config.agent.clone());

        Ok(Self::new(config.clone(), db_service.db, agents))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
