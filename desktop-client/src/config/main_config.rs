use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{GameConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigSerializer, YamlConfigSerializer};
    use std::time::Duration;

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_snake_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    fn manager_for_content(content: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, content).unwrap();
        ConfigManager::from_yaml_file(file_path)
    }

    #[test]
    fn test_default_config_matches_reference_game() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        let settings = config.game.session_settings();
        assert_eq!(settings.field_size.width, 20);
        assert_eq!(settings.field_size.height, 20);
        assert_eq!(settings.food_reward, 10);
        assert_eq!(settings.tick_interval, Duration::from_millis(150));
        assert_eq!(config.window.window_size(&settings.field_size), [420.0, 480.0]);
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let manager = manager_for_content(
            r#"
            game:
              field_width: 30
              seed: 1234
            "#,
        );
        let config = manager.get_config().unwrap();
        assert_eq!(config.game.field_width, 30);
        assert_eq!(config.game.field_height, 20);
        assert_eq!(config.game.seed, Some(1234));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_out_of_range_values_cant_be_read() {
        let manager = manager_for_content(
            r#"
            game:
              field_width: 3
              field_height: 3
            "#,
        );
        assert!(manager.get_config().is_err());

        let manager = manager_for_content(
            r#"
            window:
              cell_size: 200
            "#,
        );
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_wrong_types_cant_be_read() {
        let manager = manager_for_content(
            r#"
            game:
              tick_interval_ms: fast
            "#,
        );
        assert!(manager.get_config().is_err());
    }
}
