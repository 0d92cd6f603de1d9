use std::time::Duration;

use super::types::FieldSize;

pub const DEFAULT_FIELD_WIDTH: usize = 20;
pub const DEFAULT_FIELD_HEIGHT: usize = 20;
pub const DEFAULT_FOOD_REWARD: u32 = 10;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub field_size: FieldSize,
    pub food_reward: u32,
    pub tick_interval: Duration,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_size: FieldSize::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT),
            food_reward: DEFAULT_FOOD_REWARD,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}
