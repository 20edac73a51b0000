use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::db::SharedStore;
use crate::error::ApiError;
use crate::models::{GoalsInput, GoalsRegistered, Match, MatchDeleted, MatchUpdate, MatchesResponse, NewMatch};

// GET /matches/ - List all matches with their goal logs
pub async fn get_matches(
    State(store): State<SharedStore>,
) -> Json<MatchesResponse> {
    let matches = store.read().await.list_matches();

    Json(MatchesResponse { matches })
}

// POST /matches/ - Add a match with an empty goal log
pub async fn add_match(
    State(store): State<SharedStore>,
    Json(input): Json<NewMatch>,
) -> Json<Match> {
    Json(store.write().await.add_match(input))
}

// PUT /matches/{id} - Replace teams, date and result
pub async fn update_match(
    State(store): State<SharedStore>,
    Path(match_id): Path<i64>,
    Json(update): Json<MatchUpdate>,
) -> Result<Json<Match>, ApiError> {
    let game = store.write().await.update_match(match_id, update)?;

    Ok(Json(game))
}

// PUT /matches/{id}/gols - Register goals for a player in a match
pub async fn register_goals(
    State(store): State<SharedStore>,
    Path(match_id): Path<i64>,
    Json(input): Json<GoalsInput>,
) -> Result<Json<GoalsRegistered>, ApiError> {
    let (game, player) = store
        .write()
        .await
        .register_goals(match_id, input.player_id, input.quantity)?;

    Ok(Json(GoalsRegistered {
        message: format!(
            "{} marcou {} gol(s) na partida {}.",
            player.name, input.quantity, match_id
        ),
        game,
        player,
    }))
}

// DELETE /matches/{id} - Delete a match
pub async fn delete_match(
    State(store): State<SharedStore>,
    Path(match_id): Path<i64>,
) -> Result<Json<MatchDeleted>, ApiError> {
    let game = store.write().await.delete_match(match_id)?;

    Ok(Json(MatchDeleted {
        message: "Partida deletada com sucesso.".to_string(),
        game,
    }))
}
