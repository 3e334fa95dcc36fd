use std::path::PathBuf;

use truck_agents::AgentConfig;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时会先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 8001 | HTTP 服务端口 |
/// | DB_NAMESPACE | foodtruck | SurrealDB namespace |
/// | DB_NAME | foodtruck | SurrealDB database |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录，不设置时只输出到 stdout |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// 代理相关的 `LLM_*` 变量见 [`AgentConfig`]。
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/truck HTTP_PORT=8080 cargo run -p truck-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    pub db_namespace: String,
    pub db_name: String,
    /// 运行环境: development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 代理配置
    pub agent: AgentConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8001),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "foodtruck".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "foodtruck".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            agent: AgentConfig::from_env(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录: work_dir/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        if let Some(dir) = &self.log_dir {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let tmp = tempfile::tempdir().unwrap();
        let work_dir = tmp.path().to_string_lossy().to_string();
        let config = Config::with_overrides(work_dir.clone(), 9999);

        assert_eq!(config.http_port, 9999);
        assert_eq!(config.database_dir(), PathBuf::from(&work_dir).join("database"));

        config.ensure_work_dir_structure().unwrap();
        assert!(config.database_dir().is_dir());
    }
}
