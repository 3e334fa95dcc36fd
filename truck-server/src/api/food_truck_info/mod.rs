//! Food Truck Info API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Food truck info router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/foodtruck-info", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get).put(handler::update))
}
