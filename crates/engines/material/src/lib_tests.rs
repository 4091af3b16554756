use super::*;

#[test]
fn grabs_the_hanging_queen() {
    let mut engine = MaterialEngine::new();
    // Pawns are level, so taking the queen is worth exactly 9
    let mut board =
        GameBoard::from_fen("rnb1kbnr/pppppppp/8/3q4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1")
            .unwrap();
    let tracker = RepetitionTracker::new();

    let result = engine.select_move(&mut board, &tracker);

    let mv = result.best_move.expect("legal moves exist");
    assert_eq!(mv.to_string(), "e4d5");
    assert_eq!(result.score, 9);
}

#[test]
fn quiet_position_keeps_score_level() {
    let mut engine = MaterialEngine::new();
    let mut board = GameBoard::new();
    let tracker = RepetitionTracker::new();

    let result = engine.select_move(&mut board, &tracker);

    assert!(result.best_move.is_some());
    assert_eq!(result.score, 0);
}

#[test]
fn first_best_move_wins_ties() {
    let mut engine = MaterialEngine::new();
    let mut board = GameBoard::new();
    let tracker = RepetitionTracker::new();

    let first = engine.select_move(&mut board, &tracker).best_move;
    let second = engine.select_move(&mut board, &tracker).best_move;

    assert_eq!(first, second);
}

#[test]
fn no_moves_means_no_selection() {
    let mut engine = MaterialEngine::new();
    let mut board = GameBoard::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    let tracker = RepetitionTracker::new();

    let result = engine.select_move(&mut board, &tracker);

    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0);
}
