//! Position-count table for cheap repetition detection.
//!
//! Official threefold detection over the played line belongs to
//! [`GameBoard::game_status`]; this tracker exists so a searching
//! engine can notice it is about to revisit a placement *before* the
//! draw becomes claimable, and steer away while it is winning.

use std::collections::HashMap;

use crate::board::GameBoard;

/// Counts how often each position (by Zobrist key) has occurred on the
/// actually played game line. Speculative search positions are never
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct RepetitionTracker {
    counts: HashMap<u64, u32>,
}

impl RepetitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position that was actually played.
    pub fn record(&mut self, board: &GameBoard) {
        *self.counts.entry(board.position_hash()).or_insert(0) += 1;
    }

    /// True once this position has been recorded at least once before,
    /// i.e. its second occurrence is about to happen. Deliberately
    /// cheaper and more eager than true threefold detection.
    pub fn is_likely_repetition(&self, board: &GameBoard) -> bool {
        self.occurrences(board) >= 1
    }

    /// How many times this position has been recorded.
    pub fn occurrences(&self, board: &GameBoard) -> u32 {
        self.counts
            .get(&board.position_hash())
            .copied()
            .unwrap_or(0)
    }

    /// Clear all counts; call at the start of a new game.
    pub fn reset(&mut self) {
        self.counts.clear();
    }
}
