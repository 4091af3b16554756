//! Match configuration, overridable from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// Configuration for a match between two engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for depth-based engines
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to swap colors each game
    pub alternate_colors: bool,
    /// Print per-game progress
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file. Missing fields keep defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ArenaError::Config {
            path: path.display().to_string(),
            source,
        })
    }
}
