use super::game_state::SnakeGameState;
use super::types::{FieldSize, GameEndReason, Point};

/// Everything a host needs to paint one frame, detached from the live state.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeRenderFrame {
    pub field_size: FieldSize,
    /// Head first.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub game_over: bool,
    pub end_reason: Option<GameEndReason>,
}

impl SnakeRenderFrame {
    pub fn from_state(state: &SnakeGameState) -> Self {
        let end_reason = state.end_reason();
        // A filled board leaves the last food under the head.
        let food = match end_reason {
            Some(GameEndReason::BoardFilled) => None,
            _ => Some(state.food()),
        };

        Self {
            field_size: state.field_size().clone(),
            snake: state.snake().copied().collect(),
            food,
            score: state.score(),
            game_over: state.is_game_over(),
            end_reason,
        }
    }

    pub fn status_text(&self) -> Option<&'static str> {
        match self.end_reason? {
            GameEndReason::WallCollision | GameEndReason::SelfCollision => Some("GAME OVER!"),
            GameEndReason::BoardFilled => Some("YOU WIN!"),
        }
    }
}
