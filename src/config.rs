//! Game configuration.
//!
//! A single JSON document covering the grid size, the rhythm patterns
//! and tempo, and the per-player display styles. Every field has a
//! default, so an empty document (or no file at all) yields the
//! standard game.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::PlayerStyle;

/// Errors from loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// The file is not a valid configuration document.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid width in tiles.
    pub width: u16,
    /// Grid height in tiles.
    pub height: u16,
    /// Routine beat pattern string.
    pub routine: String,
    /// Pulse beat pattern string.
    pub pulse: String,
    /// Nominal tick interval in milliseconds.
    pub pulse_ms: u64,
    /// Playback position offset for the timing source, in milliseconds.
    pub track_offset_ms: u64,
    /// Display styles, one per player in turn order.
    pub players: Vec<PlayerStyle>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 28,
            height: 14,
            routine: "+++=--".to_string(),
            pulse: "=++++++-".to_string(),
            pulse_ms: 125,
            track_offset_ms: 0,
            players: vec![
                PlayerStyle::new("red", "maroon", "orange"),
                PlayerStyle::new("blue", "navy", "cyan"),
            ],
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid JSON for this schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }
}
