use gomoku_engine::config::{ConfigManager, FileContentConfigProvider, Validate};
use gomoku_engine::game::Difficulty;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "gomoku_config.yaml";

pub const MIN_BOARD_SIZE: u32 = 5;
pub const MAX_BOARD_SIZE: u32 = 19;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub default_board_size: u32,
    pub default_difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_board_size: 10,
            default_difficulty: Difficulty::Medium,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.default_board_size < MIN_BOARD_SIZE {
            return Err(format!(
                "default_board_size must be at least {}",
                MIN_BOARD_SIZE
            ));
        }
        if self.default_board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "default_board_size must be at most {}",
                MAX_BOARD_SIZE
            ));
        }
        Ok(())
    }
}

pub fn manager_for(file_path: &str) -> ConfigManager<FileContentConfigProvider, Config> {
    ConfigManager::from_yaml_file(file_path)
}
