/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::floors::{FloorRegistry, RegistryError};
use crate::shared::Floor;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub floors: Option<Vec<Floor>>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid floors in configuration file: {0}")]
    Registry(#[from] RegistryError),
    #[error("invalid log level '{0}'")]
    LogLevel(String),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    // Surface bad values at load time rather than on first use
    config.log_level()?;
    config.registry()?;
    Ok(config)
}

impl Config {
    /// The configured floors, or the built-in site floors when none are given.
    pub fn registry(&self) -> Result<FloorRegistry, ConfigError> {
        match &self.floors {
            Some(floors) => Ok(FloorRegistry::new(floors.clone())?),
            None => Ok(FloorRegistry::default()),
        }
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.logging
            .level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.logging.level.clone()))
    }
}
