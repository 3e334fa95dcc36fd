//! Location Model

use super::default_true;
use serde::{Deserialize, Serialize};

/// Truck stop entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 营业时段描述，例如 "Mon-Fri: 11:30AM-2:30PM"
    pub schedule: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    pub created_at: i64,
}

impl Location {
    pub fn from_payload(id: String, created_at: i64, data: LocationCreate) -> Self {
        Self {
            id,
            name: data.name,
            address: data.address,
            latitude: data.latitude,
            longitude: data.longitude,
            schedule: data.schedule,
            active: data.active,
            created_at,
        }
    }
}

/// Create / full-replace payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCreate {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}
