use super::*;

#[test]
fn startpos_is_balanced() {
    let board = GameBoard::new();
    assert_eq!(evaluate(&board), 0);
}

#[test]
fn extra_queen_scores_nine() {
    let white_to_move =
        GameBoard::from_fen("rnbqkbnr/pppppppp/8/8/4Q3/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(evaluate(&white_to_move), 9);

    let black_to_move =
        GameBoard::from_fen("rnbqkbnr/pppppppp/8/8/4Q3/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1").unwrap();
    assert_eq!(evaluate(&black_to_move), -9);
}

#[test]
fn side_to_move_antisymmetry() {
    // Same placement, opposite side to move
    let placements = [
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
        "8/5k2/3p4/8/3P4/5K2/8/3R4",
    ];
    for placement in placements {
        let white = GameBoard::from_fen(&format!("{} w - - 0 1", placement)).unwrap();
        let black = GameBoard::from_fen(&format!("{} b - - 0 1", placement)).unwrap();
        assert_eq!(evaluate(&white), -evaluate(&black), "placement {placement}");
    }
}

#[test]
fn counts_all_piece_kinds() {
    // White: R+N+4P = 5+3+4 = 12. Black: Q+B+P = 9+3+1 = 13.
    let board = GameBoard::from_fen("4k3/1q2bp2/8/8/8/8/PPPP4/R2NK3 w - - 0 1").unwrap();
    assert_eq!(evaluate(&board), -1);
}

#[test]
fn bare_kings_score_zero() {
    let board = GameBoard::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").unwrap();
    assert_eq!(evaluate(&board), 0);
}
