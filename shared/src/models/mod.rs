//! Data Models
//!
//! 每个实体都有两种形态：
//! - 完整实体 (带 `id` / `created_at`)，用于读取和响应
//! - `*Create` 负载 (不带身份字段)，用于 POST / PUT 请求体

// Business
pub mod agent;
pub mod food_truck_info;
pub mod location;
pub mod menu_item;

// System
pub mod status_check;

// Re-exports
pub use agent::{
    AgentCapabilities, CapabilitiesResponse, ChatRequest, ChatResponse, SearchRequest,
    SearchResponse,
};
pub use food_truck_info::{FoodTruckInfo, FoodTruckInfoCreate, SocialMedia};
pub use location::{Location, LocationCreate};
pub use menu_item::{MenuItem, MenuItemCreate};
pub use status_check::{StatusCheck, StatusCheckCreate};

pub(crate) fn default_true() -> bool {
    true
}
