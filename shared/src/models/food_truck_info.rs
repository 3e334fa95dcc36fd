//! Food Truck Info Model (Singleton)
//!
//! 餐车基本信息，每个部署只有一条记录

use serde::{Deserialize, Serialize};

/// Free-form social handles, e.g. `{"instagram": "@tastywheels"}`
pub type SocialMedia = serde_json::Map<String, serde_json::Value>;

/// Food truck info entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodTruckInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub phone: String,
    pub email: Option<String>,
    pub social_media: Option<SocialMedia>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: i64,
}

impl FoodTruckInfo {
    pub fn from_payload(id: String, created_at: i64, data: FoodTruckInfoCreate) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            phone: data.phone,
            email: data.email,
            social_media: data.social_media,
            logo_url: data.logo_url,
            banner_url: data.banner_url,
            created_at,
        }
    }
}

/// Upsert payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodTruckInfoCreate {
    pub name: String,
    pub description: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub social_media: Option<SocialMedia>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
}
