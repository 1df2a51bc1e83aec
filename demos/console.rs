//! Console front end: plays one game and prints each round.
//!
//! Run with `RUST_LOG=trickrs=debug` to see the engine's own events.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use trickrs::{Game, GameObserver, GameOptions, GameResult, RoundResult, RoundRule};

struct Console;

impl GameObserver for Console {
    fn round_winner_announced(&mut self, round: &RoundResult) {
        let cards: Vec<String> = round.played.iter().map(|p| p.card.to_string()).collect();
        println!(
            "Round {:>2}: {:<12} {} wins the round!",
            round.round,
            cards.join(" vs "),
            round.winner_name
        );
    }

    fn game_winner_announced(&mut self, result: &GameResult) {
        for score in &result.scores {
            println!("{}: {} cards", score.name, score.cards);
        }
        println!("{} wins the game!", result.winner_name);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let rule = if std::env::args().any(|arg| arg == "--highest") {
        RoundRule::HighestCard
    } else {
        RoundRule::FirstInOrder
    };

    println!("Seed {seed}, rule {rule:?}");

    let options = GameOptions::default().with_round_rule(rule);
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Deck error: {err}");
            return;
        }
    };

    if let Err(err) = game.run_with(&mut Console) {
        eprintln!("Game error: {err}");
    }
}
