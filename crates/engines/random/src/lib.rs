//! Random Move Engine
//!
//! Selects uniformly at random from all legal moves. Useful for:
//! - Exercising the harness without any search cost
//! - Baseline comparisons (any real engine should beat this)

use game_core::{Engine, GameBoard, RepetitionTracker, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An engine that plays random legal moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn select_move(&mut self, board: &mut GameBoard, _tracker: &RepetitionTracker) -> SearchResult {
        let moves = board.legal_moves();
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: moves.len() as u64,
        }
    }

    fn name(&self) -> &str {
        "Random v1"
    }
}
