use serde::{Deserialize, Serialize};
use snake_common::config::{ensure_in_range, Validate};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub cell_size_px: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mario Snake".to_string(),
            cell_size_px: 32,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("window title must not be empty".to_string());
        }
        ensure_in_range(self.cell_size_px, 8..=128, "cell_size_px must be between 8 and 128")
    }
}
