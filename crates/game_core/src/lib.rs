//! Core game layer for the engine lab.
//!
//! All rules logic (legal move generation, check detection, FEN parsing)
//! is delegated to the `chess` crate. This crate wraps it with the
//! bookkeeping the engines need — an apply/undo ply stack, draw
//! detection over the played line, a repetition tracker — and defines
//! the `Engine` trait every move selector implements.

pub mod board;
pub mod driver;
pub mod repetition;

pub use board::{GameBoard, GameStatus, MoveOutcome};
pub use driver::EngineDriver;
pub use repetition::RepetitionTracker;

// Re-export the oracle types that appear in engine signatures so the
// engine crates only need a game_core dependency.
pub use chess::{ChessMove, Color, Piece, Square};

/// Result of a move-selection call.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<ChessMove>,
    /// Score from the side-to-move's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

/// Trait that all engines must implement.
///
/// This allows swapping between the random baseline, the one-ply
/// material mover, and the alpha-beta searcher at composition time.
pub trait Engine: Send {
    /// Select a move for the current position.
    ///
    /// The board is borrowed mutably because searching engines walk the
    /// game tree by applying and undoing moves in place; every
    /// implementation must return the board exactly as it found it.
    /// The tracker reflects positions on the actually played line and
    /// is read-only during selection.
    fn select_move(&mut self, board: &mut GameBoard, tracker: &RepetitionTracker) -> SearchResult;

    /// Engine name for reports and match logs.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn reset(&mut self) {}
}
