//! Plays games between two engine drivers.

use game_core::{Color, EngineDriver, GameBoard, GameStatus};

use crate::config::MatchConfig;
use crate::results::{GameResult, MatchResult};

/// Runs matches between two engines.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match; the result is from engine1's perspective.
    pub fn run_match(
        &self,
        engine1: &mut EngineDriver,
        engine2: &mut EngineDriver,
    ) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };

            result.add(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game; the result is from white's perspective.
    fn play_game(&self, white: &mut EngineDriver, black: &mut EngineDriver) -> GameResult {
        let mut board = GameBoard::new();
        white.new_game();
        black.new_game();

        for _ply in 0..self.config.max_moves {
            let status = if board.side_to_move() == Color::White {
                white.make_engine_move(&mut board)
            } else {
                black.make_engine_move(&mut board)
            };

            match status {
                GameStatus::Ongoing => {}
                GameStatus::Checkmate => {
                    // After the move, the side to move is the mated side
                    return if board.side_to_move() == Color::White {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                }
                GameStatus::Stalemate
                | GameStatus::ThreefoldRepetition
                | GameStatus::FiftyMoveRule
                | GameStatus::InsufficientMaterial => return GameResult::Draw,
            }
        }

        // Move cap reached
        GameResult::Draw
    }
}

/// Convenience wrapper for a one-off match.
pub fn quick_match(
    engine1: &mut EngineDriver,
    engine2: &mut EngineDriver,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}
