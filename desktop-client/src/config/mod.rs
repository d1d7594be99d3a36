mod assets_config;
mod game_config;
mod main_config;
mod window_config;

pub use assets_config::AssetsConfig;
pub use game_config::GameConfig;
pub use main_config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};
pub use window_config::WindowConfig;
