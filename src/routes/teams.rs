use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::db::SharedStore;
use crate::error::ApiError;
use crate::models::{NewTeam, Team, TeamDeleted, TeamsResponse};

// GET /teams/ - List all teams
pub async fn get_teams(
    State(store): State<SharedStore>,
) -> Json<TeamsResponse> {
    let teams = store.read().await.list_teams();

    Json(TeamsResponse { teams })
}

// GET /teams/{id} - Get team by ID
pub async fn get_team_by_id(
    State(store): State<SharedStore>,
    Path(team_id): Path<i64>,
) -> Result<Json<Team>, ApiError> {
    let team = store.read().await.get_team(team_id)?;

    Ok(Json(team))
}

// POST /teams/ - Add a team
pub async fn add_team(
    State(store): State<SharedStore>,
    Json(input): Json<NewTeam>,
) -> Json<Team> {
    Json(store.write().await.add_team(input))
}

// DELETE /teams/{id} - Delete a team (players and matches keep the name)
pub async fn delete_team(
    State(store): State<SharedStore>,
    Path(team_id): Path<i64>,
) -> Result<Json<TeamDeleted>, ApiError> {
    let team = store.write().await.delete_team(team_id)?;

    Ok(Json(TeamDeleted {
        message: "Time deletado com sucesso.".to_string(),
        team,
    }))
}
