//! Status Check Model

use serde::{Deserialize, Serialize};

/// Append-only client ping record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    /// Unix millis
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}
