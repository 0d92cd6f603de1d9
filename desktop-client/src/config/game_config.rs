use std::time::Duration;

use common::config::Validate;
use common::games::snake::{
    DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_FOOD_REWARD, DEFAULT_TICK_INTERVAL_MS,
    FieldSize, SnakeSessionSettings,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
    pub food_reward: u32,
    /// Fixed seed for a reproducible food sequence.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            field_size: FieldSize::new(self.field_width as usize, self.field_height as usize),
            food_reward: self.food_reward,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_height < 5 {
            return Err("field dimensions must be at least 5x5".to_string());
        }
        if self.field_width > 100 || self.field_height > 100 {
            return Err("field dimensions must not exceed 100x100".to_string());
        }
        if self.tick_interval_ms < 20 {
            return Err("tick_interval_ms must be at least 20".to_string());
        }
        if self.tick_interval_ms > 2000 {
            return Err("tick_interval_ms must not exceed 2000".to_string());
        }
        if self.food_reward == 0 {
            return Err("food_reward must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH as u32,
            field_height: DEFAULT_FIELD_HEIGHT as u32,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS as u32,
            food_reward: DEFAULT_FOOD_REWARD,
            seed: None,
        }
    }
}
