//! Status Check Repository (append-only)

use super::{BaseRepository, RepoResult};
use shared::models::{StatusCheck, StatusCheckCreate};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct StatusCheckRepository {
    base: BaseRepository,
}

impl StatusCheckRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<StatusCheck>> {
        let checks: Vec<StatusCheck> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, client_name, timestamp \
                 FROM status_check ORDER BY timestamp ASC LIMIT $limit",
            )
            .bind(("limit", super::LIST_LIMIT))
            .await?
            .take(0)?;
        Ok(checks)
    }

    pub async fn create(&self, data: StatusCheckCreate) -> RepoResult<StatusCheck> {
        let check = StatusCheck {
            id: new_id(),
            client_name: data.client_name,
            timestamp: now_millis(),
        };

        self.base
            .db()
            .query("CREATE type::thing('status_check', $id) SET client_name = $client_name, timestamp = $timestamp RETURN NONE")
            .bind(("id", check.id.clone()))
            .bind(("client_name", check.client_name.clone()))
            .bind(("timestamp", check.timestamp))
            .await?
            .check()?;

        Ok(check)
    }
}
