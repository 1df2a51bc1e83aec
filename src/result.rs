//! Round and game result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::options::PLAYER_COUNT;
use crate::round::PlayedCard;

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Cards played this round, in seat order.
    pub played: Vec<PlayedCard>,
    /// Seat of the player who took the cards.
    pub winner_seat: usize,
    /// Name of the player who took the cards.
    pub winner_name: String,
    /// Hand sizes after the winner collected the cards.
    pub hand_sizes: [usize; PLAYER_COUNT],
}

/// Final card count of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    /// Seat index.
    pub seat: usize,
    /// Player name.
    pub name: String,
    /// Cards held when the game ended.
    pub cards: usize,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Seat of the player holding the most cards.
    pub winner_seat: usize,
    /// Name of the player holding the most cards.
    pub winner_name: String,
    /// Scores for every player, in seat order.
    pub scores: Vec<PlayerScore>,
    /// Number of rounds played.
    pub rounds_played: u32,
    /// Whether the game stopped at the round cap rather than on an empty hand.
    pub round_limit_reached: bool,
}
