//! Round resolution.

use crate::card::Card;
use crate::options::RoundRule;

/// A card played by the player in `seat` during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    /// Seat index of the player who played the card.
    pub seat: usize,
    /// The card played.
    pub card: Card,
}

/// Comparison key of one played card under `rule`.
///
/// Higher keys win.
fn round_key(rule: RoundRule, played: &PlayedCard, round: &[PlayedCard]) -> u8 {
    match rule {
        RoundRule::FirstInOrder => u8::from(round.iter().any(|other| other.card == played.card)),
        RoundRule::HighestCard => played.card.ordinal(),
    }
}

/// Picks the winning seat of a round.
///
/// Each played card gets a key from `rule`; the first card holding the
/// maximum key in play order wins. Returns `None` only for an empty round.
///
/// Under [`RoundRule::FirstInOrder`] every card is a member of the round's
/// play set, so all keys tie and the first seat always wins.
///
/// # Example
///
/// ```
/// use trickrs::round::{PlayedCard, resolve_round};
/// use trickrs::{Card, Rank, RoundRule, Suit};
///
/// let round = [
///     PlayedCard { seat: 0, card: Card::new(Rank::Six, Suit::Clubs) },
///     PlayedCard { seat: 1, card: Card::new(Rank::Ace, Suit::Spades) },
/// ];
/// assert_eq!(resolve_round(&round, RoundRule::FirstInOrder), Some(0));
/// assert_eq!(resolve_round(&round, RoundRule::HighestCard), Some(1));
/// ```
#[must_use]
pub fn resolve_round(round: &[PlayedCard], rule: RoundRule) -> Option<usize> {
    let mut best: Option<(u8, usize)> = None;

    for played in round {
        let key = round_key(rule, played, round);
        // Strictly greater keeps the earliest seat on ties.
        if best.is_none_or(|(best_key, _)| key > best_key) {
            best = Some((key, played.seat));
        }
    }

    best.map(|(_, seat)| seat)
}
