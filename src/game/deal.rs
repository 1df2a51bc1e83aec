use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::deal_order;

use super::{Game, GameState};

impl Game {
    /// Deals the whole deck one card at a time in seat order.
    pub(super) fn deal(&mut self, deck: Vec<Card>) {
        debug_assert_eq!(self.state, GameState::Dealing);

        let seats = deal_order(self.players.len());
        for (card, seat) in deck.into_iter().zip(seats) {
            self.players[seat].receive_card(card);
        }

        for player in &self.players {
            tracing::debug!(player = player.name(), cards = player.card_count(), "dealt hand");
        }

        self.state = GameState::RoundLoop;
    }
}
