use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::GridSize;

pub const MIN_GRID_SIDE: u16 = 5;
pub const MAX_GRID_SIDE: u16 = 200;
pub const MAX_TICKS_PER_SECOND: u32 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 30,
            ticks_per_second: 10,
        }
    }
}

impl GameConfig {
    /// Reads a YAML config. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sides = MIN_GRID_SIDE..=MAX_GRID_SIDE;
        if !sides.contains(&self.grid_width) || !sides.contains(&self.grid_height) {
            return Err(ConfigError::Invalid(format!(
                "grid dimensions must be between {MIN_GRID_SIDE} and {MAX_GRID_SIDE}, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if !(1..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return Err(ConfigError::Invalid(format!(
                "ticks_per_second must be between 1 and {MAX_TICKS_PER_SECOND}, got {}",
                self.ticks_per_second
            )));
        }
        Ok(())
    }

    pub fn grid(&self) -> GridSize {
        GridSize::new(self.grid_width, self.grid_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}
