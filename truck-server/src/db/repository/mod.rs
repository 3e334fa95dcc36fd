//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

// Business
pub mod food_truck_info;
pub mod location;
pub mod menu_item;

// System
pub mod status_check;

// Re-exports
pub use food_truck_info::FoodTruckInfoRepository;
pub use location::LocationRepository;
pub use menu_item::MenuItemRepository;
pub use status_check::StatusCheckRepository;

use serde::{Deserialize, Serialize};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// 单次列表查询的上限，超出部分被静默截断
pub const LIST_LIMIT: usize = 1000;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 记录键 (record key) 就是对外的 UUID：
//   - 写入: CREATE type::thing('menu_item', $id) CONTENT $data
//   - 读取: SELECT record::id(id) AS id, ... 返回纯 UUID 字符串
//   - 文档内容 ($data) 不含 id 字段
//
// food_truck_info 例外：固定记录 food_truck_info:main，UUID 存在 info_id 字段

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Stored document body: payload fields plus the creation time
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Document<T> {
    #[serde(flatten)]
    pub fields: T,
    pub created_at: i64,
}

/// Minimal view of a deleted record
#[derive(Debug, Deserialize)]
pub(crate) struct DeletedRecord {
    #[allow(dead_code)]
    pub id: RecordId,
}
