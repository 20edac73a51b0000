use axum::response::Json;
use crate::models::WelcomeResponse;

// GET / - Welcome message
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Bem-vindo ao Campeonato de inverno HJ".to_string(),
    })
}
