pub mod health;
pub mod game_state;

pub use health::*;
pub use game_state::*;
