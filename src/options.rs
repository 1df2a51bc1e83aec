//! Game configuration options.

extern crate alloc;

use alloc::string::String;

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 2;

/// How the winner of a round is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RoundRule {
    /// Every played card is keyed by whether it belongs to the round's play
    /// set. All keys tie, so the first seat takes every round.
    #[default]
    FirstInOrder,
    /// The highest card wins, ranks first and suits breaking ties.
    HighestCard,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use trickrs::{GameOptions, RoundRule};
///
/// let options = GameOptions::default()
///     .with_player_names("Alice", "Bob")
///     .with_round_rule(RoundRule::HighestCard)
///     .with_max_rounds(500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Player names in seat order.
    pub player_names: [String; PLAYER_COUNT],
    /// Rule used to resolve each round.
    pub round_rule: RoundRule,
    /// Rounds after which the game is scored even if no hand is empty.
    pub max_rounds: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_names: [String::from("Player 1"), String::from("Player 2")],
            round_rule: RoundRule::FirstInOrder,
            max_rounds: 1000,
        }
    }
}

impl GameOptions {
    /// Sets the player names, first seat first.
    ///
    /// # Example
    ///
    /// ```
    /// use trickrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_names("Ann", "Ivan");
    /// assert_eq!(options.player_names, ["Ann", "Ivan"]);
    /// ```
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Sets the round resolution rule.
    ///
    /// # Example
    ///
    /// ```
    /// use trickrs::{GameOptions, RoundRule};
    ///
    /// let options = GameOptions::default().with_round_rule(RoundRule::HighestCard);
    /// assert_eq!(options.round_rule, RoundRule::HighestCard);
    /// ```
    #[must_use]
    pub const fn with_round_rule(mut self, rule: RoundRule) -> Self {
        self.round_rule = rule;
        self
    }

    /// Sets the round cap.
    ///
    /// # Example
    ///
    /// ```
    /// use trickrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(200);
    /// assert_eq!(options.max_rounds, 200);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
