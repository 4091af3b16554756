//! Match results storage and reporting.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::error::ArenaError;

/// Result of a single game, from engine1's perspective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Flip perspective (engine1 played the other color).
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Aggregate of a multi-game match, from engine1's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Match score for engine1: 1 per win, 0.5 per draw.
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// A complete match: participants, settings, and the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig, result: MatchResult) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result,
        }
    }

    /// Save the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ArenaError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ArenaError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load a previously saved report.
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, depth {}, max {} moves\n",
            self.config.num_games, self.config.depth, self.config.max_moves
        ));
        report.push_str(&format!(
            "Score ({}): {}-{}-{} ({:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print the report to stdout.
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_counts_draws_as_half() {
        let mut result = MatchResult::new();
        result.add(GameResult::Win);
        result.add(GameResult::Draw);
        result.add(GameResult::Loss);
        result.add(GameResult::Draw);
        assert_eq!(result.total_games(), 4);
        assert!((result.score() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_match_scores_even() {
        assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn report_json_round_trip() {
        let mut result = MatchResult::new();
        result.add(GameResult::Win);
        let report = MatchReport::new("minimax", "random", MatchConfig::default(), result);
        let json = serde_json::to_string(&report).unwrap();
        let decoded: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.engine1, "minimax");
        assert_eq!(decoded.result.wins, 1);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut result = MatchResult::new();
        result.add(GameResult::Draw);
        let report = MatchReport::new("random", "random", MatchConfig::default(), result);

        let path = std::env::temp_dir().join("arena_report_round_trip.json");
        report.save(&path).unwrap();
        let loaded = MatchReport::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.engine2, "random");
        assert_eq!(loaded.result.draws, 1);
    }

    #[test]
    fn text_report_mentions_both_engines() {
        let report = MatchReport::new(
            "minimax",
            "material",
            MatchConfig::default(),
            MatchResult::new(),
        );
        let text = report.generate_report();
        assert!(text.contains("minimax"));
        assert!(text.contains("material"));
    }
}
