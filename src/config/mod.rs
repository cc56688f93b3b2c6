// Configuration module for Ballbot
// Handles loading the game geometry from TOML and exposing it to strategies

pub mod loader;
pub mod types;

use anyhow::{anyhow, Result};
use std::sync::OnceLock;

pub use loader::{create_default_config, get_config_path, load_config, load_config_from};
pub use types::{
    FieldConfig, GameConfig, GoalConfig, PlayerConfig, StrategyConfig, ROLE_COUNT,
};

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Install the process-wide game configuration. Only the first call wins.
pub fn install(config: GameConfig) -> Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow!("game configuration is already installed"))
}

/// Process-wide game configuration, falling back to defaults if none was installed
pub fn get_config() -> &'static GameConfig {
    CONFIG.get_or_init(GameConfig::default)
}
