use common::config::Validate;
use common::games::snake::FieldSize;
use serde::{Deserialize, Serialize};

const HORIZONTAL_MARGIN: f32 = 20.0;
const STATUS_STRIP_HEIGHT: f32 = 80.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    /// Edge of one board cell in points.
    pub cell_size: u32,
}

impl WindowConfig {
    /// Inner window size fitting the board plus the score strip below it.
    pub fn window_size(&self, field_size: &FieldSize) -> [f32; 2] {
        let cell_size = self.cell_size as f32;
        [
            cell_size * field_size.width as f32 + HORIZONTAL_MARGIN,
            cell_size * field_size.height as f32 + STATUS_STRIP_HEIGHT,
        ]
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(8..=64).contains(&self.cell_size) {
            return Err("cell_size must be between 8 and 64".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { cell_size: 20 }
    }
}
