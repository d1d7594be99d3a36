use serde::{Deserialize, Serialize};
use snake_common::config::Validate;

/// Sprite paths. A path that cannot be loaded falls back to a solid colour.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AssetsConfig {
    pub head_sprite: String,
    pub food_sprite: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            head_sprite: "mario.png".to_string(),
            food_sprite: "mushroom.png".to_string(),
        }
    }
}

impl Validate for AssetsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.head_sprite.is_empty() || self.food_sprite.is_empty() {
            return Err("sprite paths must not be empty".to_string());
        }
        Ok(())
    }
}
