//! Material Greedy Engine
//!
//! Scores every legal move by the static material evaluation of the
//! resulting position and plays the best one. No lookahead beyond one
//! ply, so it grabs hanging pieces and nothing else.

use game_core::{ChessMove, Engine, GameBoard, RepetitionTracker, SearchResult};
use minimax_engine::evaluate;

#[cfg(test)]
mod lib_tests;

/// One-ply greedy move selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEngine;

impl MaterialEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for MaterialEngine {
    fn select_move(&mut self, board: &mut GameBoard, _tracker: &RepetitionTracker) -> SearchResult {
        let moves = board.legal_moves();
        let nodes = moves.len() as u64;

        let mut best: Option<(ChessMove, i32)> = None;
        for mv in moves {
            // Child evaluation is from the opponent's perspective
            let score = -board.with_move(mv, |child| evaluate(child));
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, score)| score).unwrap_or(0),
            depth: 1,
            nodes,
        }
    }

    fn name(&self) -> &str {
        "Material v2"
    }
}
