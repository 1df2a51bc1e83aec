//! Game engine and state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{shuffled_deck, validate_deck};
use crate::error::DeckError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{GameResult, PlayerScore};

mod deal;
mod play;
pub mod state;

pub use state::GameState;

/// A two-player trick game.
///
/// The game owns the players and drives the state machine
/// `Dealing -> RoundLoop -> Finished`. Use [`GameOptions`] to name the
/// players and choose how rounds are resolved.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Players in seat order.
    players: Vec<Player>,
    /// Rounds played so far.
    rounds_played: u32,
    /// Whether the game was stopped by the round cap.
    round_limit_reached: bool,
}

impl Game {
    /// Creates a game, shuffles a fresh deck with the given seed and deals it.
    ///
    /// The returned game is ready to play.
    ///
    /// # Errors
    ///
    /// Returns an error if the built deck is not a complete 36-card deck.
    ///
    /// # Example
    ///
    /// ```
    /// use trickrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42)?;
    /// assert_eq!(game.state(), GameState::RoundLoop);
    /// assert_eq!(game.total_cards(), 36);
    /// # Ok::<(), trickrs::DeckError>(())
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DeckError> {
        Self::with_deck(options, shuffled_deck(seed))
    }

    /// Creates a game and deals the given deck in its current order.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck` does not hold exactly the 36 distinct cards.
    pub fn with_deck(options: GameOptions, deck: Vec<Card>) -> Result<Self, DeckError> {
        validate_deck(&deck)?;

        let players = options
            .player_names
            .iter()
            .map(|name| Player::new(name.as_str()))
            .collect();

        let mut game = Self {
            options,
            state: GameState::Dealing,
            players,
            rounds_played: 0,
            round_limit_reached: false,
        };
        game.deal(deck);

        Ok(game)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the number of cards across all hands.
    ///
    /// Outside of a round this is always the deck size.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(Player::card_count).sum()
    }

    /// Returns whether the game has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::Finished
    }

    /// Seat of the player holding the most cards, earliest seat on ties.
    fn leading_seat(&self) -> usize {
        let mut leader = 0;
        for (seat, player) in self.players.iter().enumerate() {
            if player.card_count() > self.players[leader].card_count() {
                leader = seat;
            }
        }
        leader
    }

    /// Scores the game.
    ///
    /// Returns `None` until the game is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.state != GameState::Finished {
            return None;
        }

        let winner_seat = self.leading_seat();
        let scores = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, player)| PlayerScore {
                seat,
                name: player.name().into(),
                cards: player.card_count(),
            })
            .collect();

        Some(GameResult {
            winner_seat,
            winner_name: self.players[winner_seat].name().into(),
            scores,
            rounds_played: self.rounds_played,
            round_limit_reached: self.round_limit_reached,
        })
    }
}
