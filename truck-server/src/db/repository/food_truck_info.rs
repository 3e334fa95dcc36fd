//! Food Truck Info Repository (Singleton)
//!
//! 固定记录 `food_truck_info:main` 保证最多一条文档；对外 UUID 保存在 `info_id`。

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{FoodTruckInfo, FoodTruckInfoCreate};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// 已存在时保留 info_id / created_at，其余字段整体替换
const UPSERT: &str = "
UPSERT food_truck_info:main SET
    info_id = info_id ?? $info_id,
    created_at = created_at ?? $now,
    name = $data.name,
    description = $data.description,
    phone = $data.phone,
    email = $data.email,
    social_media = $data.social_media,
    logo_url = $data.logo_url,
    banner_url = $data.banner_url
RETURN NONE;
SELECT info_id AS id, name, description, phone, email, social_media, logo_url, banner_url, created_at
    FROM food_truck_info:main;
";

#[derive(Clone)]
pub struct FoodTruckInfoRepository {
    base: BaseRepository,
}

impl FoodTruckInfoRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Get the singleton, if one was ever saved
    pub async fn get(&self) -> RepoResult<Option<FoodTruckInfo>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT info_id AS id, name, description, phone, email, social_media, logo_url, banner_url, created_at \
                 FROM food_truck_info:main",
            )
            .await?;
        let infos: Vec<FoodTruckInfo> = result.take(0)?;
        Ok(infos.into_iter().next())
    }

    /// Create-or-replace in one statement
    pub async fn upsert(&self, data: FoodTruckInfoCreate) -> RepoResult<FoodTruckInfo> {
        let mut result = self
            .base
            .db()
            .query(UPSERT)
            .bind(("info_id", new_id()))
            .bind(("now", now_millis()))
            .bind(("data", data))
            .await?
            .check()?;

        let infos: Vec<FoodTruckInfo> = result.take(1)?;
        infos
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to upsert food truck info".to_string()))
    }
}
