//! Deck construction, shuffling and dealing order.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Builds the full 36-card deck in declared order.
///
/// Cards are rank-major: all four suits of Six first, then Seven, and so on.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Shuffles the cards in place with the given random source.
///
/// Every permutation is equally likely for a uniform `rng`.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Builds a deck and shuffles it with a generator seeded from `seed`.
///
/// The same seed always yields the same ordering.
///
/// # Example
///
/// ```
/// use trickrs::deck::shuffled_deck;
///
/// assert_eq!(shuffled_deck(7), shuffled_deck(7));
/// ```
#[must_use]
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cards = build_deck();
    shuffle(&mut cards, &mut rng);
    cards
}

/// Checks that `cards` is a complete deck: 36 cards with no duplicates.
///
/// # Errors
///
/// Returns [`DeckError::WrongSize`] if the card count is off and
/// [`DeckError::DuplicateCard`] for the first repeated card.
pub fn validate_deck(cards: &[Card]) -> Result<(), DeckError> {
    if cards.len() != DECK_SIZE {
        return Err(DeckError::WrongSize {
            expected: DECK_SIZE,
            actual: cards.len(),
        });
    }

    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for &card in cards {
        if !seen.insert(card) {
            return Err(DeckError::DuplicateCard(card));
        }
    }

    Ok(())
}

/// Seat sequence for round-robin dealing: `0, 1, .., n - 1, 0, 1, ..`.
///
/// The iterator is lazy and endless; clone it to restart from seat 0.
///
/// # Example
///
/// ```
/// use trickrs::deck::deal_order;
///
/// let seats: Vec<usize> = deal_order(2).take(5).collect();
/// assert_eq!(seats, [0, 1, 0, 1, 0]);
/// ```
pub fn deal_order(player_count: usize) -> impl Iterator<Item = usize> + Clone {
    (0..player_count).cycle()
}
