//! Graph Routes - Affinity map data

use axum::{extract::State, routing::get, Json, Router};

use crate::models::GraphResponse;
use crate::routes::ApiError;
use crate::AppState;

/// Nodes and overlap edges for the visualization
#[utoipa::path(
    get,
    path = "/api/graph",
    responses(
        (status = 200, description = "Profile graph", body = GraphResponse),
        (status = 502, description = "Profile store unavailable")
    ),
    tag = "Graph"
)]
pub async fn get_graph(State(state): State<AppState>) -> Result<Json<GraphResponse>, ApiError> {
    let graph = state.profile_service.graph().await?;
    Ok(Json(graph.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/graph", get(get_graph))
}
