use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::db::SharedStore;
use crate::error::ApiError;
use crate::models::{NewPlayer, Player, PlayerDeleted, PlayersResponse};

// GET /players/ - List all players
pub async fn get_players(
    State(store): State<SharedStore>,
) -> Json<PlayersResponse> {
    let players = store.read().await.list_players();

    Json(PlayersResponse { players })
}

// GET /players/{id} - Get player by ID
pub async fn get_player_by_id(
    State(store): State<SharedStore>,
    Path(player_id): Path<i64>,
) -> Result<Json<Player>, ApiError> {
    let player = store.read().await.get_player(player_id)?;

    Ok(Json(player))
}

// POST /players/ - Add a player, goals default to 0
pub async fn add_player(
    State(store): State<SharedStore>,
    Json(input): Json<NewPlayer>,
) -> Json<Player> {
    Json(store.write().await.add_player(input))
}

// DELETE /players/{id} - Delete a player
pub async fn delete_player(
    State(store): State<SharedStore>,
    Path(player_id): Path<i64>,
) -> Result<Json<PlayerDeleted>, ApiError> {
    let player = store.write().await.delete_player(player_id)?;

    Ok(Json(PlayerDeleted {
        message: "Jogador deletado com sucesso.".to_string(),
        player,
    }))
}
