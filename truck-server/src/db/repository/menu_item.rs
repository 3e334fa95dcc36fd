//! Menu Item Repository

use super::{BaseRepository, DeletedRecord, Document, RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate};
use shared::util::{new_id, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items in insertion order (at most LIST_LIMIT)
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, description, price, category, image_url, available, created_at \
                 FROM menu_item ORDER BY created_at ASC LIMIT $limit",
            )
            .bind(("limit", super::LIST_LIMIT))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, description, price, category, image_url, available, created_at \
                 FROM type::thing('menu_item', $id)",
            )
            .bind(("id", id.to_string()))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    /// Create a new menu item with a fresh id and creation time
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let id = new_id();
        let created_at = now_millis();

        self.base
            .db()
            .query("CREATE type::thing('menu_item', $id) CONTENT $data RETURN NONE")
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

        Ok(MenuItem::from_payload(id, created_at, data))
    }

    /// Full replacement; `id` and `created_at` are carried over
    pub async fn update(&self, id: &str, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Menu item not found".to_string()))?;

        self.base
            .db()
            .query("UPDATE type::thing('menu_item', $id) CONTENT $data RETURN NONE")
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

        Ok(MenuItem::from_payload(existing.id, existing.created_at, data))
    }

    /// Hard delete; `false` when nothing matched
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<DeletedRecord> =
            self.base.db().delete((TABLE, id.to_string())).await?;
        Ok(deleted.is_some())
    }
}
