use axum::Json;
use crate::models::GameState;
use tracing::debug;

/// Initial game state endpoint
pub async fn game_state() -> Json<GameState> {
    debug!("Game state requested");
    Json(GameState::initial())
}
