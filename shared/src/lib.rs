//! Shared types for the food truck backend
//!
//! Storage/wire models and small utilities used by both the server and
//! any client crates.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
