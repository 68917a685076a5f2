use pathgrid_core::{Error, Result};
use pathgrid_paths::Algorithm;
use serde::{Deserialize, Serialize};

use crate::speed::Speed;

/// Session settings. Every field has a default, so `{}` is a valid
/// configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Grid width in cells.
    pub width: i32,
    /// Grid height in cells.
    pub height: i32,
    /// Suggested on-screen size of one cell, in pixels. Only hosts read it.
    pub cell_size: u32,
    pub algorithm: Algorithm,
    pub speed: Speed,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 40,
            height: 25,
            cell_size: 20,
            algorithm: Algorithm::default(),
            speed: Speed::default(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.height < 1 {
            return Err(Error::Config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
