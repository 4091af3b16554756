//! Match harness for the engine lab.
//!
//! Provides infrastructure for:
//! - Playing head-to-head matches between any two engines
//! - Persisting results as JSON and printing text reports
//! - Loading match settings from a TOML file
//!
//! # Usage
//!
//! ```bash
//! # 20 games, minimax vs the one-ply material mover
//! cargo run -p arena -- minimax material --games 20 --depth 4
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::MatchConfig;
pub use error::ArenaError;
pub use match_runner::{quick_match, MatchRunner};
pub use results::{GameResult, MatchReport, MatchResult};
