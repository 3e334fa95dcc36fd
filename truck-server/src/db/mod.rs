//! Database Module
//!
//! 嵌入式 SurrealDB：生产环境使用 RocksDB 引擎，测试使用内存引擎。

pub mod defaults;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// 表定义 (schemaless) + created_at 索引，按插入顺序列出时使用
const SCHEMA: &str = "
DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS;
DEFINE INDEX IF NOT EXISTS menu_item_created_at ON menu_item FIELDS created_at;
DEFINE TABLE IF NOT EXISTS location SCHEMALESS;
DEFINE INDEX IF NOT EXISTS location_created_at ON location FIELDS created_at;
DEFINE TABLE IF NOT EXISTS food_truck_info SCHEMALESS;
DEFINE TABLE IF NOT EXISTS status_check SCHEMALESS;
DEFINE INDEX IF NOT EXISTS status_check_timestamp ON status_check FIELDS timestamp;
";

/// Database service, owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `db_path`
    pub async fn new(db_path: &str, namespace: &str, database: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established (SurrealDB RocksDB)");

        Self::setup(db, namespace, database).await
    }

    /// In-memory database, used by tests
    pub async fn memory(namespace: &str, database: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

        Self::setup(db, namespace, database).await
    }

    async fn setup(db: Surreal<Db>, namespace: &str, database: &str) -> Result<Self, AppError> {
        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|r| r.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::info!(ns = %namespace, db = %database, "Database schema applied");

        Ok(Self { db })
    }
}
