//! Configuration loading from TOML files

mod constants;

pub use constants::{AllocationConstants, ArenaConfig, CombatConstants, StarterConstants};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate arena configuration from a TOML file
pub fn load_arena_config(path: &Path) -> Result<ArenaConfig, ConfigError> {
    let config: ArenaConfig = load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate arena configuration from a TOML string
pub fn parse_arena_config(content: &str) -> Result<ArenaConfig, ConfigError> {
    let config: ArenaConfig = parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Get the shipped arena configuration
pub fn default_arena() -> ArenaConfig {
    let toml = include_str!("../../config/arena.toml");
    parse_arena_config(toml).unwrap_or_default()
}
