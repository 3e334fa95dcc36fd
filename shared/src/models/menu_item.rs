//! Menu Item Model

use super::default_true;
use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
    /// 创建时间 (Unix millis)
    pub created_at: i64,
}

impl MenuItem {
    /// Assemble an entity from a payload plus server-assigned identity
    pub fn from_payload(id: String, created_at: i64, data: MenuItemCreate) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            image_url: data.image_url,
            available: data.available,
            created_at,
        }
    }
}

/// Create / full-replace payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}
