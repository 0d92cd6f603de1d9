mod frame;
mod game_state;
mod settings;
mod types;

pub use frame::SnakeRenderFrame;
pub use game_state::SnakeGameState;
pub use settings::{
    DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_FOOD_REWARD, DEFAULT_TICK_INTERVAL_MS,
    SnakeSessionSettings,
};
pub use types::{Direction, FieldSize, GameEndReason, Point};
