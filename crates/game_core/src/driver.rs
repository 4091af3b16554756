//! Drives one engine through a game, one move at a time.

use crate::board::{GameBoard, GameStatus};
use crate::repetition::RepetitionTracker;
use crate::Engine;

/// Pairs an engine with its repetition tracker for one game.
///
/// Each engine in a game gets its own driver: the tracker records the
/// position the driver sees before selecting (capturing the opponent's
/// just-played move) and again after applying its own move, so over a
/// full game each driver observes every position on the line once.
pub struct EngineDriver {
    engine: Box<dyn Engine>,
    tracker: RepetitionTracker,
}

impl EngineDriver {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            engine,
            tracker: RepetitionTracker::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.engine.name()
    }

    /// The tracker for this driver's game line.
    pub fn tracker(&self) -> &RepetitionTracker {
        &self.tracker
    }

    /// Reset engine and tracker state for a new game.
    pub fn new_game(&mut self) {
        self.tracker.reset();
        self.engine.reset();
    }

    /// Make one engine move end to end.
    ///
    /// Records the current position, asks the engine for a move,
    /// applies it, records the new position, and reports the game
    /// status. A position with no legal moves is terminal, not an
    /// error: the status is returned without consulting the engine.
    pub fn make_engine_move(&mut self, board: &mut GameBoard) -> GameStatus {
        self.tracker.record(board);

        if board.legal_moves().is_empty() {
            return board.game_status();
        }

        let result = self.engine.select_move(board, &self.tracker);
        match result.best_move {
            Some(mv) => {
                board.apply(mv);
                self.tracker.record(board);
                board.game_status()
            }
            // Unreachable when legal moves exist; engines fall back to
            // a random legal move rather than returning None here.
            None => board.game_status(),
        }
    }
}
