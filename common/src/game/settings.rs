use std::time::Duration;

use super::types::GridSize;

pub const DEFAULT_GRID: GridSize = GridSize::new(20, 15);
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSettings {
    pub grid: GridSize,
    pub tick_interval: Duration,
    /// Fixed food seed; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid: DEFAULT_GRID,
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
        }
    }
}
