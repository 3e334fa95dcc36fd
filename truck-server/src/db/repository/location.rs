//! Location Repository

use super::{BaseRepository, DeletedRecord, Document, RepoError, RepoResult};
use shared::models::{Location, LocationCreate};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "location";

#[derive(Clone)]
pub struct LocationRepository {
    base: BaseRepository,
}

impl LocationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all locations in insertion order (at most LIST_LIMIT)
    pub async fn find_all(&self) -> RepoResult<Vec<Location>> {
        let locations: Vec<Location> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, address, latitude, longitude, schedule, active, created_at \
                 FROM location ORDER BY created_at ASC LIMIT $limit",
            )
            .bind(("limit", super::LIST_LIMIT))
            .await?
            .take(0)?;
        Ok(locations)
    }

    /// Find location by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Location>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, address, latitude, longitude, schedule, active, created_at \
                 FROM type::thing('location', $id)",
            )
            .bind(("id", id.to_string()))
            .await?;
        let locations: Vec<Location> = result.take(0)?;
        Ok(locations.into_iter().next())
    }

    /// Create a new location with a fresh id and creation time
    pub async fn create(&self, data: LocationCreate) -> RepoResult<Location> {
        let id = new_id();
        let created_at = now_millis();

        self.base
            .db()
            .query("CREATE type::thing('location', $id) CONTENT $data RETURN NONE")
            .bind(("id", id.clone()))
            .bind((
                "data",
                Document {
                    fields: data.clone(),
                    created_at,
                },
            ))
            .await?
            .check()?;

        Ok(Location::from_payload(id, created_at, data))
    }

    /// Full replacement; `id` and `created_at` are carried over
    pub async fn update(&self, id: &str, data: LocationCreate) -> RepoResult<Location> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Location not found".to_string()))?;

        self.base
            .db()
            .query("UPDATE type::thing('location', $id) CONTENT $data RETURN NONE")
            .bind(("id", id.to_string()))
            .bind((
                "data",
                Document {
                    fields: data.clone(),
                    created_at: existing.created_at,
                },
            ))
            .await?
            .check()?;

        Ok(Location::from_payload(existing.id, existing.created_at, data))
    }

    /// Hard delete; `false` when nothing matched
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<DeletedRecord> =
            self.base.db().delete((TABLE, id.to_string())).await?;
        Ok(deleted.is_some())
    }
}
