use axum::{extract::State, response::Json};
use serde::Serialize;
use crate::db::SharedStore;

/// Liveness plus the current size of each collection
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: i64,
    teams: usize,
    matches: usize,
    players: usize,
}

// GET /health
pub async fn health_check(State(store): State<SharedStore>) -> Json<HealthResponse> {
    let store = store.read().await;

    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().timestamp(),
        teams: store.list_teams().len(),
        matches: store.list_matches().len(),
        players: store.list_players().len(),
    })
}
