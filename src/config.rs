// src/config.rs
// Generation parameters, loadable from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Which margin the split-point draw reserves on each side of a cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMargin {
    /// Reserve a fixed one-unit margin. `min_room_size` is not consulted;
    /// it is kept for the downstream room builder's discretion.
    #[default]
    FixedUnit,
    /// Reserve `min_room_size` on each side instead of the fixed unit, so
    /// no produced space has a side shorter than `min_room_size`.
    MinRoomSize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// The minimum length/width for a side of a room.
    pub min_room_size: f64,
    /// The area at which a space stops subdividing.
    pub max_leaf_area: f64,
    /// Margin policy for split-point draws.
    pub margin: SplitMargin,
    /// Size of the root space along the x axis.
    pub root_length: f64,
    /// Size of the root space along the z axis.
    pub root_width: f64,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        PartitionConfig {
            min_room_size: 1.0,
            max_leaf_area: 1.0,
            margin: SplitMargin::FixedUnit,
            root_length: 64.0,
            root_width: 64.0,
        }
    }
}

impl PartitionConfig {
    /// Load a config from a JSON file. Missing fields fall back to their
    /// defaults; values are validated before the config is returned.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: PartitionConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_room_size <= 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "min_room_size must be positive, got {}",
                self.min_room_size
            )));
        }
        if self.max_leaf_area <= 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "max_leaf_area must be positive, got {}",
                self.max_leaf_area
            )));
        }
        if self.root_length <= 0.0 || self.root_width <= 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "root space must have positive dimensions, got {} x {}",
                self.root_length, self.root_width
            )));
        }
        Ok(())
    }
}
