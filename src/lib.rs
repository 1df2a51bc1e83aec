//! A two-player trick game engine with optional `no_std` support.
//!
//! A 36-card deck (Six through Ace in four suits) is shuffled and dealt
//! evenly. Each round both players play the first card of their hand and the
//! round winner takes both cards. The game ends as soon as a hand is empty,
//! and the player holding the most cards wins.
//!
//! # Example
//!
//! ```
//! use trickrs::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_player_names("Ann", "Ivan");
//! let mut game = Game::new(options, 42)?;
//! let result = game.run()?;
//! assert_eq!(game.total_cards(), 36);
//! assert_eq!(result.winner_name, "Ann");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod observer;
pub mod options;
pub mod player;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{DeckError, PlayError};
pub use game::{Game, GameState};
pub use observer::GameObserver;
pub use options::{GameOptions, PLAYER_COUNT, RoundRule};
pub use player::Player;
pub use result::{GameResult, PlayerScore, RoundResult};
pub use round::PlayedCard;
