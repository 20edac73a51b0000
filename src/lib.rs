use axum::{routing::{get, put}, Router};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use db::SharedStore;

/// Builds the tournament router over the given store.
pub fn app(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::health_check))

        // Team endpoints
        .route("/teams/", get(routes::teams::get_teams).post(routes::teams::add_team))
        .route("/teams/{id}", get(routes::teams::get_team_by_id).delete(routes::teams::delete_team))

        // Match endpoints
        .route("/matches/", get(routes::matches::get_matches).post(routes::matches::add_match))
        .route("/matches/{id}", put(routes::matches::update_match).delete(routes::matches::delete_match))
        .route("/matches/{id}/gols", put(routes::matches::register_goals))

        // Player endpoints
        .route("/players/", get(routes::players::get_players).post(routes::players::add_player))
        .route("/players/{id}", get(routes::players::get_player_by_id).delete(routes::players::delete_player))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
