//! Rules oracle wrapper around `chess::Board`.
//!
//! `GameBoard` keeps a stack of plies so that moves can be applied and
//! undone in place during search. The `chess` crate's `Board` does not
//! carry the halfmove clock, so the wrapper tracks it alongside each
//! ply for fifty-move detection.

use std::fmt;
use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Rank};

/// One entry on the ply stack: a position plus its halfmove clock.
#[derive(Debug, Clone, Copy)]
struct Ply {
    board: Board,
    halfmove_clock: u32,
}

/// Terminal state of a game, checked after every played move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    ThreefoldRepetition,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GameStatus::Ongoing => "Ongoing",
            GameStatus::Checkmate => "Checkmate!",
            GameStatus::Stalemate => "Stalemate",
            GameStatus::ThreefoldRepetition => "Threefold Repetition Draw",
            GameStatus::FiftyMoveRule => "Fifty-Move Rule Draw",
            GameStatus::InsufficientMaterial => "Insufficient Material",
        };
        write!(f, "{}", msg)
    }
}

/// Outcome of attempting an arbitrary (e.g. user-supplied) move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is not legal in the current position.
    Illegal,
    /// The move was played; carries the resulting game status.
    Played(GameStatus),
}

/// A chess position with apply/undo history.
///
/// Exactly one `GameBoard` exists per game. Search engines thread a
/// mutable reference through the recursion and must pair every `apply`
/// with exactly one `undo` before returning from that stack frame;
/// [`GameBoard::with_move`] enforces the pairing on all exit paths.
#[derive(Debug, Clone)]
pub struct GameBoard {
    stack: Vec<Ply>,
}

impl GameBoard {
    /// Starting position.
    pub fn new() -> Self {
        Self {
            stack: vec![Ply {
                board: Board::default(),
                halfmove_clock: 0,
            }],
        }
    }

    /// Build a board from a FEN string.
    ///
    /// The `chess` crate drops the halfmove counter during parsing, so
    /// it is recovered from the fifth FEN field here.
    pub fn from_fen(fen: &str) -> Result<Self, chess::Error> {
        let board = Board::from_str(fen)?;
        let halfmove_clock = fen
            .split_whitespace()
            .nth(4)
            .and_then(|field| field.parse().ok())
            .unwrap_or(0);
        Ok(Self {
            stack: vec![Ply {
                board,
                halfmove_clock,
            }],
        })
    }

    /// The current position.
    pub fn current(&self) -> &Board {
        // The stack is seeded by the constructors and undo refuses to
        // pop the root ply, so it is never empty.
        &self.stack.last().expect("ply stack is never empty").board
    }

    fn top(&self) -> &Ply {
        self.stack.last().expect("ply stack is never empty")
    }

    /// Number of plies on the stack, including the root position.
    pub fn ply_count(&self) -> usize {
        self.stack.len()
    }

    /// All legal moves in the current position, regenerated fresh.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(self.current()).collect()
    }

    /// Whether the move captures a piece (including en passant).
    pub fn is_capture(&self, mv: ChessMove) -> bool {
        let board = self.current();
        if board.piece_on(mv.get_dest()).is_some() {
            return true;
        }
        // En passant: a pawn changing file onto an empty square
        board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
    }

    /// Apply a legal move in place.
    ///
    /// The move must come from [`GameBoard::legal_moves`]; applying an
    /// illegal move is a contract violation, not a recoverable error.
    pub fn apply(&mut self, mv: ChessMove) {
        let top = *self.top();
        let resets_clock =
            self.is_capture(mv) || top.board.piece_on(mv.get_source()) == Some(Piece::Pawn);
        let halfmove_clock = if resets_clock {
            0
        } else {
            top.halfmove_clock + 1
        };
        self.stack.push(Ply {
            board: top.board.make_move_new(mv),
            halfmove_clock,
        });
    }

    /// Revert the most recent `apply`.
    ///
    /// Panics if called without a matching `apply`: undoing past the
    /// root would corrupt the game history.
    pub fn undo(&mut self) {
        assert!(self.stack.len() > 1, "undo without a matching apply");
        self.stack.pop();
    }

    /// Apply `mv`, run `f`, then undo — on every exit path.
    ///
    /// All recursive search descents go through this so that an early
    /// return (e.g. a beta cutoff) can never leave the position dirty.
    pub fn with_move<T>(&mut self, mv: ChessMove, f: impl FnOnce(&mut Self) -> T) -> T {
        self.apply(mv);
        let out = f(self);
        self.undo();
        out
    }

    /// Attempt an arbitrary move, e.g. one assembled from UI input.
    ///
    /// A pawn push to the last rank without an explicit promotion piece
    /// is retried as a queen promotion before being rejected.
    pub fn try_move(&mut self, mv: ChessMove) -> MoveOutcome {
        if self.current().legal(mv) {
            self.apply(mv);
            return MoveOutcome::Played(self.game_status());
        }
        if mv.get_promotion().is_none() && self.is_promotion_push(mv) {
            let promoted = ChessMove::new(mv.get_source(), mv.get_dest(), Some(Piece::Queen));
            if self.current().legal(promoted) {
                self.apply(promoted);
                return MoveOutcome::Played(self.game_status());
            }
        }
        MoveOutcome::Illegal
    }

    fn is_promotion_push(&self, mv: ChessMove) -> bool {
        let board = self.current();
        if board.piece_on(mv.get_source()) != Some(Piece::Pawn) {
            return false;
        }
        let last_rank = match board.side_to_move() {
            Color::White => Rank::Eighth,
            Color::Black => Rank::First,
        };
        mv.get_dest().get_rank() == last_rank
    }

    pub fn side_to_move(&self) -> Color {
        self.current().side_to_move()
    }

    /// Zobrist hash of the current position (placement, castling
    /// rights, en passant square, side to move; move counters are
    /// excluded).
    pub fn position_hash(&self) -> u64 {
        self.current().get_hash()
    }

    pub fn is_checkmate(&self) -> bool {
        self.current().status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.current().status() == BoardStatus::Stalemate
    }

    /// Fifty moves by both sides without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.top().halfmove_clock >= 100
    }

    /// The current position has occurred three times on this line.
    pub fn is_threefold_repetition(&self) -> bool {
        let key = self.position_hash();
        self.stack
            .iter()
            .filter(|ply| ply.board.get_hash() == key)
            .count()
            >= 3
    }

    /// Bare kings, or a lone minor piece against a bare king.
    pub fn is_insufficient_material(&self) -> bool {
        let board = self.current();
        let majors_and_pawns =
            *board.pieces(Piece::Pawn) | *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
        if majors_and_pawns.popcnt() > 0 {
            return false;
        }
        let minors = *board.pieces(Piece::Knight) | *board.pieces(Piece::Bishop);
        minors.popcnt() <= 1
    }

    /// Terminal-state query for the current position.
    pub fn game_status(&self) -> GameStatus {
        if self.is_checkmate() {
            GameStatus::Checkmate
        } else if self.is_stalemate() {
            GameStatus::Stalemate
        } else if self.is_fifty_move_draw() {
            GameStatus::FiftyMoveRule
        } else if self.is_threefold_repetition() {
            GameStatus::ThreefoldRepetition
        } else if self.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::Ongoing
        }
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
