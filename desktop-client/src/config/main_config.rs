use std::path::Path;

use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

use super::{AssetsConfig, GameConfig, WindowConfig};

pub const DEFAULT_CONFIG_FILE: &str = "snake_client_config.yaml";

pub fn get_config_manager(
    path: impl AsRef<Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub window: WindowConfig,
    pub assets: AssetsConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        self.assets.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer, MemoryConfigProvider};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        let settings = Config::default().game.to_settings();
        assert_eq!(settings.grid.width, 20);
        assert_eq!(settings.grid.height, 15);
        assert_eq!(settings.tick_interval.as_millis(), 100);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let mut config = Config::default();
        config.game.seed = Some(1234);
        config.window.cell_size_px = 24;

        let manager = ConfigManager::new(
            FileContentConfigProvider::new(get_temp_file_path()),
            YamlConfigSerializer::new(),
        );
        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_write_default_if_missing() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);
        assert_eq!(manager.write_default_if_missing(), Ok(true));
        assert_eq!(manager.write_default_if_missing(), Ok(false));

        let content = FileContentConfigProvider::new(&file_path)
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(content.contains("field_width: 20"));
        assert!(content.contains("food_sprite: mushroom.png"));
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let content = r#"
            game:
              field_width: 2
              field_height: 15
              tick_interval_ms: 100
              seed: null
            window:
              title: Mario Snake
              cell_size_px: 32
            assets:
              head_sprite: mario.png
              food_sprite: mushroom.png
        "#;
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(
            MemoryConfigProvider::with_content(content),
            YamlConfigSerializer::new(),
        );
        let error = manager.get_config().unwrap_err();
        assert!(error.contains("field_width"));
    }

    #[test]
    fn test_malformed_config_cant_be_read() {
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(
            MemoryConfigProvider::with_content("game: [not, a, map]"),
            YamlConfigSerializer::new(),
        );
        assert!(manager.get_config().is_err());
    }
}
