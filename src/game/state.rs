//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The deck is being dealt to the players.
    Dealing,
    /// Rounds are being played.
    RoundLoop,
    /// A hand ran out (or the round cap was hit) and the game can be scored.
    Finished,
}
