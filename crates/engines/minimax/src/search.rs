//! Negamax search with alpha-beta pruning and draw avoidance.

use game_core::{ChessMove, GameBoard, RepetitionTracker};

use crate::eval::evaluate;

/// Worst-outcome sentinel: checkmate against the side to move. Large
/// enough to dominate any material score, small enough that negation
/// cannot overflow.
pub const MATE_SCORE: i32 = 1_000_000;

/// Returned for drawish positions when the side to move is materially
/// ahead. A winning side should prefer shedding a pawn of score over
/// shuffling into a draw; a side that is behind treats draws as
/// neutral.
pub const DRAW_PENALTY: i32 = -1;

// Root bounds. Wider than any reachable score, including the mate
// sentinel, so the root can never fail high or low.
const ALPHA_START: i32 = i32::MIN / 2;
const BETA_START: i32 = i32::MAX / 2;

/// Best move found at the root together with its score.
pub struct SearchOutcome {
    pub best_move: Option<ChessMove>,
    pub score: i32,
}

/// Runs a fixed-depth search and returns the best root move.
///
/// `best_move` is `None` only when the root has no legal moves; with
/// maximally wide root bounds any legal move raises alpha at least
/// once.
pub fn select_move(
    board: &mut GameBoard,
    tracker: &RepetitionTracker,
    depth: u8,
    nodes: &mut u64,
) -> SearchOutcome {
    let mut best_move = None;
    let score = negamax(
        board,
        tracker,
        depth,
        0,
        ALPHA_START,
        BETA_START,
        &mut best_move,
        nodes,
    );
    SearchOutcome { best_move, score }
}

/// Legal moves with captures first. A stable partition keeps the
/// oracle's enumeration order within each group, which makes the
/// root tie-break deterministic.
fn ordered_moves(board: &GameBoard) -> Vec<ChessMove> {
    let mut moves = board.legal_moves();
    moves.sort_by_key(|&mv| !board.is_capture(mv));
    moves
}

/// Drawish positions score zero unless the side to move is ahead in
/// material, in which case steering into the draw is penalized.
fn draw_score(board: &GameBoard) -> i32 {
    if evaluate(board) > 0 {
        DRAW_PENALTY
    } else {
        0
    }
}

#[allow(clippy::too_many_arguments)]
fn negamax(
    board: &mut GameBoard,
    tracker: &RepetitionTracker,
    ply_remaining: u8,
    ply_from_root: u8,
    mut alpha: i32,
    beta: i32,
    best_move: &mut Option<ChessMove>,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    // Repetition and fifty-move checks only below the root: the root
    // position itself is always on the played line.
    if ply_from_root > 0
        && (tracker.is_likely_repetition(board) || board.is_fifty_move_draw())
    {
        return draw_score(board);
    }

    let moves = ordered_moves(board);

    if moves.is_empty() {
        if board.is_checkmate() {
            return -MATE_SCORE;
        }
        // Stalemate: same winning-side draw aversion as interior nodes
        return draw_score(board);
    }

    if ply_remaining == 0 {
        return evaluate(board);
    }

    for mv in moves {
        let score = -board.with_move(mv, |child| {
            negamax(
                child,
                tracker,
                ply_remaining - 1,
                ply_from_root + 1,
                -beta,
                -alpha,
                best_move,
                nodes,
            )
        });

        if score >= beta {
            return beta; // Beta cutoff: opponent has a refutation
        }
        if score > alpha {
            alpha = score;
            if ply_from_root == 0 {
                *best_move = Some(mv);
            }
        }
    }

    alpha
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
