// Configuration file loading and creation

use super::types::GameConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ballbot");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from the default location, or create it if missing.
///
/// An unparseable or invalid file is reported and replaced by defaults in
/// memory; the file on disk is left alone.
pub fn load_config() -> Result<GameConfig> {
    let config_path = get_config_path();

    if !config_path.exists() {
        create_default_config(&config_path)?;
        return Ok(GameConfig::default());
    }

    match load_config_from(&config_path) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("Failed to load config file: {:#}", e);
            warn!("Using default configuration");
            Ok(GameConfig::default())
        }
    }
}

/// Load and validate a configuration file, failing on any problem
pub fn load_config_from(path: &Path) -> Result<GameConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: GameConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validating config file {}", path.display()))?;
    Ok(config)
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    let config = GameConfig::default();
    let toml_string =
        toml::to_string_pretty(&config).context("serializing default config")?;

    // Add helpful header comments
    let commented_toml = format!(
        "# Ballbot Configuration File\n\
         # Geometry must match the engine you play against\n\
         #\n\
         # num_players: controlled players per team (at least 4)\n\
         # strategy.ours / strategy.theirs: tactic per side,\n\
         #     one of \"do_nothing\", \"ball_chase\", \"smart_team\"\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("writing config file {}", path.display()))?;
    info!("Created default config file at: {}", path.display());
    Ok(())
}
