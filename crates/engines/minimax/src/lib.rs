//! Minimax Chess Engine
//!
//! Fixed-depth negamax with alpha-beta pruning, captures-first move
//! ordering, and material evaluation. The search leans on the driver's
//! repetition tracker to avoid shuffling into a draw while ahead.

mod eval;
mod search;

use game_core::{Engine, GameBoard, RepetitionTracker, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

pub use eval::evaluate;
pub use search::{DRAW_PENALTY, MATE_SCORE};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// Negamax engine with alpha-beta pruning.
///
/// Single-threaded and synchronous: one call to `select_move` runs the
/// whole fixed-depth search to completion on one shared board,
/// applying and undoing moves in place.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        Self { depth, nodes: 0 }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn select_move(&mut self, board: &mut GameBoard, tracker: &RepetitionTracker) -> SearchResult {
        self.nodes = 0;

        let outcome = search::select_move(board, tracker, self.depth, &mut self.nodes);

        // Wide root bounds guarantee a best move whenever legal moves
        // exist; a random legal move is the defensive fallback.
        let best_move = outcome
            .best_move
            .or_else(|| board.legal_moves().choose(&mut thread_rng()).copied());

        SearchResult {
            best_move,
            score: outcome.score,
            depth: self.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v3"
    }

    fn reset(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
