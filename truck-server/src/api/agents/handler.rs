//! Agent API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use shared::models::{CapabilitiesResponse, ChatRequest, ChatResponse, SearchRequest, SearchResponse};

/// POST /api/chat
pub async fn chat(
    State(state): State<ServerState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(state.agents.chat(request).await)
}

/// POST /api/search
pub async fn search(
    State(state): State<ServerState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    Json(state.agents.search(request).await)
}

/// GET /api/agents/capabilities
pub async fn capabilities(State(state): State<ServerState>) -> Json<CapabilitiesResponse> {
    Json(state.agents.capabilities().await)
}
