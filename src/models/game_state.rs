use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Snapshot of a game session as exposed to the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GameState {
    pub score: i64,
    pub level: i64,
    pub is_playing: bool,
}

impl GameState {
    /// State of a game that has not started yet
    pub const fn initial() -> Self {
        Self {
            score: 0,
            level: 1,
            is_playing: false,
        }
    }
}
