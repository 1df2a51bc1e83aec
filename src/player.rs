//! Player and hand representation.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::card::Card;
use crate::error::PlayError;

/// A player and the cards they hold.
///
/// Cards are played from the front of the hand and received at the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards in the hand.
    hand: VecDeque<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Removes and returns the first card in the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if the hand has no cards.
    pub fn play_card(&mut self) -> Result<Card, PlayError> {
        self.hand.pop_front().ok_or(PlayError::EmptyHand)
    }

    /// Adds a single card to the end of the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    /// Adds cards to the end of the hand, keeping their order.
    pub fn receive_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.extend(cards);
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Iterates over the hand in play order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.hand.iter()
    }
}
