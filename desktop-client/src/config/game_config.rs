use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_common::config::{ensure_in_range, Validate};
use snake_common::{GridSize, SnakeSettings, DEFAULT_GRID, DEFAULT_TICK_INTERVAL};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn to_settings(&self) -> SnakeSettings {
        SnakeSettings {
            grid: GridSize::new(self.field_width, self.field_height),
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
            seed: self.seed,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_GRID.width,
            field_height: DEFAULT_GRID.height,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u32,
            seed: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        ensure_in_range(self.field_width, 5..=100, "field_width must be between 5 and 100")?;
        ensure_in_range(self.field_height, 5..=100, "field_height must be between 5 and 100")?;
        ensure_in_range(
            self.tick_interval_ms,
            20..=2000,
            "tick_interval_ms must be between 20 and 2000",
        )?;
        Ok(())
    }
}
