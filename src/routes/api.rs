use crate::handlers::game_state;
use axum::{routing::get, Router};

/// Create API routes
pub fn create_api_routes() -> Router {
    Router::new()
        .route("/game/state", get(game_state))
}
