//! Hooks for a presentation layer.

use crate::result::{GameResult, RoundResult};

/// Receives game progress while [`Game::run_with`](crate::Game::run_with)
/// drives the round loop.
///
/// Both methods default to doing nothing. `()` is the silent observer.
pub trait GameObserver {
    /// Called after every round with the round's winner.
    fn round_winner_announced(&mut self, round: &RoundResult) {
        let _ = round;
    }

    /// Called once when the game has a winner.
    fn game_winner_announced(&mut self, result: &GameResult) {
        let _ = result;
    }
}

impl GameObserver for () {}
