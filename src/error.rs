use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Collection a failed lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Team,
    Match,
    Player,
}

impl Entity {
    fn not_found_message(self) -> &'static str {
        match self {
            Entity::Team => "Time não encontrado.",
            Entity::Match => "Partida não encontrada.",
            Entity::Player => "Jogador não encontrado.",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{}", .0.not_found_message())]
    NotFound(Entity),
    #[error("No máximo {max} gol(s) por registro.")]
    TooManyGoals { max: u32 },
    #[error("Total de gols do jogador excederia o limite.")]
    GoalTallyOverflow,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(entity) => {
                tracing::warn!(?entity, "lookup by id failed");
                StatusCode::NOT_FOUND
            }
            ApiError::TooManyGoals { .. } | ApiError::GoalTallyOverflow => {
                tracing::warn!(error = %self, "goal registration rejected");
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_collection() {
        assert_eq!(ApiError::NotFound(Entity::Team).to_string(), "Time não encontrado.");
        assert_eq!(ApiError::NotFound(Entity::Match).to_string(), "Partida não encontrada.");
        assert_eq!(ApiError::NotFound(Entity::Player).to_string(), "Jogador não encontrado.");
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound(Entity::Player).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rejected_goal_registration_maps_to_422() {
        let response = ApiError::TooManyGoals { max: 100 }.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let response = ApiError::GoalTallyOverflow.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
