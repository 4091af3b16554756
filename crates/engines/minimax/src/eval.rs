//! Material-based position evaluation.

use game_core::{Color, GameBoard, Piece};

/// Material values in pawns. The king is never counted as capturable
/// material.
const PIECE_VALUES: [(Piece, i32); 5] = [
    (Piece::Pawn, 1),
    (Piece::Knight, 3),
    (Piece::Bishop, 3),
    (Piece::Rook, 5),
    (Piece::Queen, 9),
];

/// Evaluates the position from the side-to-move's perspective.
///
/// Pure material count via bitboard popcount: positive means the side
/// to move is ahead. Identical placements always score identically —
/// the function has no positional terms and no history dependence.
/// Detecting that a position is drawn is the search's job, not this
/// function's.
pub fn evaluate(board: &GameBoard) -> i32 {
    let pos = board.current();
    let white = *pos.color_combined(Color::White);
    let black = *pos.color_combined(Color::Black);

    let mut score = 0i32;
    for (piece, value) in PIECE_VALUES {
        let bb = *pos.pieces(piece);
        score += value * ((bb & white).popcnt() as i32 - (bb & black).popcnt() as i32);
    }

    if pos.side_to_move() == Color::White {
        score
    } else {
        -score
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
