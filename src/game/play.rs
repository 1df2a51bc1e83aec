use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PlayError;
use crate::observer::GameObserver;
use crate::options::PLAYER_COUNT;
use crate::player::Player;
use crate::result::{GameResult, RoundResult};
use crate::round::{PlayedCard, resolve_round};

use super::{Game, GameState};

impl Game {
    /// Plays one round: every player plays their first card and the round
    /// winner takes all of them.
    ///
    /// After the transfer the game finishes if any hand is empty or the round
    /// cap has been reached.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidState`] if the game is not in the round
    /// loop and [`PlayError::EmptyHand`] if a player has nothing to play.
    /// Neither happens for a game created with [`Game::new`] that has not
    /// finished yet.
    pub fn play_round(&mut self) -> Result<RoundResult, PlayError> {
        if self.state != GameState::RoundLoop {
            return Err(PlayError::InvalidState);
        }

        // Nobody plays unless everybody can.
        if self.players.iter().any(Player::is_empty) {
            return Err(PlayError::EmptyHand);
        }

        let mut played = Vec::with_capacity(self.players.len());
        for (seat, player) in self.players.iter_mut().enumerate() {
            played.push(PlayedCard {
                seat,
                card: player.play_card()?,
            });
        }

        // `played` holds one card per seat, so the round always has a winner.
        // An empty round could only mean nobody had a card to play.
        let winner_seat =
            resolve_round(&played, self.options.round_rule).ok_or(PlayError::EmptyHand)?;
        let winner = &mut self.players[winner_seat];
        winner.receive_cards(played.iter().map(|p| p.card));
        let winner_name = String::from(winner.name());

        self.rounds_played += 1;
        tracing::debug!(
            round = self.rounds_played,
            winner = %winner_name,
            "round won"
        );

        let mut hand_sizes = [0; PLAYER_COUNT];
        for (size, player) in hand_sizes.iter_mut().zip(&self.players) {
            *size = player.card_count();
        }

        if self.players.iter().any(Player::is_empty) {
            self.state = GameState::Finished;
        } else if self.rounds_played >= self.options.max_rounds {
            tracing::warn!(
                rounds = self.rounds_played,
                "round cap reached, scoring by card count"
            );
            self.round_limit_reached = true;
            self.state = GameState::Finished;
        }

        Ok(RoundResult {
            round: self.rounds_played,
            played,
            winner_seat,
            winner_name,
            hand_sizes,
        })
    }

    /// Plays rounds until the game finishes and returns the final result.
    ///
    /// # Errors
    ///
    /// See [`Game::play_round`].
    ///
    /// # Example
    ///
    /// ```
    /// use trickrs::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7)?;
    /// let result = game.run()?;
    /// assert_eq!(result.winner_name, "Player 1");
    /// assert_eq!(result.rounds_played, 18);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn run(&mut self) -> Result<GameResult, PlayError> {
        self.run_with(&mut ())
    }

    /// Like [`Game::run`], reporting each round and the final winner to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// See [`Game::play_round`].
    #[tracing::instrument(level = "debug", skip_all, fields(rule = ?self.options.round_rule))]
    pub fn run_with<O>(&mut self, observer: &mut O) -> Result<GameResult, PlayError>
    where
        O: GameObserver + ?Sized,
    {
        while self.state == GameState::RoundLoop {
            let round = self.play_round()?;
            observer.round_winner_announced(&round);
        }

        let result = self.result().ok_or(PlayError::InvalidState)?;
        tracing::info!(
            winner = %result.winner_name,
            rounds = result.rounds_played,
            "game finished"
        );
        observer.game_winner_announced(&result);

        Ok(result)
    }
}
