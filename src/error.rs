//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while validating a deck.
///
/// These indicate a construction defect; a deck built by
/// [`build_deck`](crate::deck::build_deck) never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not hold the expected number of cards.
    #[error("deck has {actual} cards, expected {expected}")]
    WrongSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards found.
        actual: usize,
    },
    /// The same card appears more than once.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// A player tried to play with no cards left.
    #[error("player has no cards to play")]
    EmptyHand,
    /// Invalid game state for playing a round.
    #[error("invalid game state for playing a round")]
    InvalidState,
}
