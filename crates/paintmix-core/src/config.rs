//! Game configuration: the paint catalog and difficulty table.
//!
//! Built-in defaults match the shipped game. A config can also be read from
//! JSON, for example:
//!
//! ```json
//! {
//!   "catalog": {
//!     "entries": [{ "color": "red", "rgb": "#ff3b30" }],
//!     "white": "#ffffff"
//!   },
//!   "difficulties": {
//!     "low":    { "color": [2, 4], "white": [1, 2] },
//!     "medium": { "color": [3, 6], "white": [1, 3] },
//!     "high":   { "color": [4, 8], "white": [2, 6] }
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultyTable;
use crate::error::{PaintMixError, PaintMixResult};
use crate::palette::ColorCatalog;

/// Everything `generate_order` needs besides the difficulty and randomness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub catalog: ColorCatalog,
    #[serde(default)]
    pub difficulties: DifficultyTable,
}

impl GameConfig {
    /// Parse a config from JSON. Missing sections use defaults; the catalog
    /// and ranges are validated while deserializing.
    pub fn from_json(json: &str) -> PaintMixResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| PaintMixError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn to_json(&self) -> PaintMixResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PaintMixError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> PaintMixResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PaintMixError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded config from {} ({} catalog colors)",
            path.display(),
            config.catalog.len()
        );
        Ok(config)
    }
}
