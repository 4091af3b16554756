use super::*;

#[test]
fn engine_returns_legal_move_and_node_count() {
    let mut engine = MinimaxEngine::with_depth(2);
    let mut board = GameBoard::new();
    let tracker = RepetitionTracker::new();

    let result = engine.select_move(&mut board, &tracker);

    let mv = result.best_move.expect("start position has legal moves");
    assert!(board.legal_moves().contains(&mv));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 20, "depth-2 search visits more than the root moves");
}

#[test]
fn engine_returns_none_when_no_legal_moves() {
    let mut engine = MinimaxEngine::new();
    let mut board =
        GameBoard::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    let tracker = RepetitionTracker::new();

    let result = engine.select_move(&mut board, &tracker);

    assert!(result.best_move.is_none());
    assert_eq!(result.score, -MATE_SCORE);
}

#[test]
fn default_depth_is_four() {
    let mut engine = MinimaxEngine::new();
    let mut board = GameBoard::new();
    let tracker = RepetitionTracker::new();
    let result = engine.select_move(&mut board, &tracker);
    assert_eq!(result.depth, 4);
    assert!(result.best_move.is_some());
}
