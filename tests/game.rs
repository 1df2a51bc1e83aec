//! Game integration tests.

use proptest::prelude::*;
use trickrs::deck::{build_deck, shuffled_deck};
use trickrs::{
    Card, DeckError, Game, GameObserver, GameOptions, GameResult, GameState, PlayError, Player,
    Rank, RoundResult, RoundRule, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Unshuffled deck: seat 0 is dealt the even ordinals, seat 1 the odd ones.
fn ordered_game(options: GameOptions) -> Game {
    Game::with_deck(options, build_deck()).unwrap()
}

#[derive(Default)]
struct Recorder {
    round_winners: Vec<String>,
    game_winners: Vec<String>,
}

impl GameObserver for Recorder {
    fn round_winner_announced(&mut self, round: &RoundResult) {
        self.round_winners.push(round.winner_name.clone());
    }

    fn game_winner_announced(&mut self, result: &GameResult) {
        self.game_winners.push(result.winner_name.clone());
    }
}

#[test]
fn player_plays_from_front_and_receives_at_back() {
    let mut player = Player::new("Ann");
    player.receive_card(card(Rank::Six, Suit::Hearts));
    player.receive_cards([card(Rank::Ace, Suit::Clubs), card(Rank::Ten, Suit::Spades)]);
    assert_eq!(player.card_count(), 3);

    assert_eq!(player.play_card().unwrap(), card(Rank::Six, Suit::Hearts));
    let rest: Vec<Card> = player.cards().copied().collect();
    assert_eq!(
        rest,
        [card(Rank::Ace, Suit::Clubs), card(Rank::Ten, Suit::Spades)]
    );
}

#[test]
fn single_card_hand_plays_once() {
    let mut player = Player::new("Ivan");
    player.receive_card(card(Rank::Jack, Suit::Diamonds));

    assert_eq!(player.play_card().unwrap(), card(Rank::Jack, Suit::Diamonds));
    assert_eq!(player.card_count(), 0);
    assert!(player.is_empty());
    assert_eq!(player.play_card().unwrap_err(), PlayError::EmptyHand);
}

#[test]
fn new_game_deals_eighteen_cards_each() {
    let game = Game::new(GameOptions::default(), 42).unwrap();
    assert_eq!(game.state(), GameState::RoundLoop);
    assert_eq!(game.players().len(), 2);
    assert_eq!(game.player(0).unwrap().card_count(), 18);
    assert_eq!(game.player(1).unwrap().card_count(), 18);
    assert_eq!(game.player(0).unwrap().name(), "Player 1");
    assert_eq!(game.player(1).unwrap().name(), "Player 2");
    assert!(game.player(2).is_none());
    assert_eq!(game.rounds_played(), 0);
    assert!(game.result().is_none());
}

#[test]
fn dealing_is_round_robin() {
    let game = ordered_game(GameOptions::default());
    let deck = build_deck();

    let first: Vec<Card> = game.player(0).unwrap().cards().copied().collect();
    let second: Vec<Card> = game.player(1).unwrap().cards().copied().collect();
    let evens: Vec<Card> = deck.iter().copied().step_by(2).collect();
    let odds: Vec<Card> = deck.iter().copied().skip(1).step_by(2).collect();

    assert_eq!(first, evens);
    assert_eq!(second, odds);
}

#[test]
fn with_deck_rejects_invalid_decks() {
    let mut short = build_deck();
    short.truncate(20);
    assert_eq!(
        Game::with_deck(GameOptions::default(), short).unwrap_err(),
        DeckError::WrongSize {
            expected: 36,
            actual: 20
        }
    );

    let mut duplicated = build_deck();
    duplicated[1] = duplicated[0];
    assert_eq!(
        Game::with_deck(GameOptions::default(), duplicated).unwrap_err(),
        DeckError::DuplicateCard(card(Rank::Six, Suit::Hearts))
    );
}

#[test]
fn first_round_goes_to_first_seat_in_play_order() {
    let mut game = ordered_game(GameOptions::default());

    let round = game.play_round().unwrap();
    assert_eq!(round.round, 1);
    assert_eq!(round.winner_seat, 0);
    assert_eq!(round.winner_name, "Player 1");
    assert_eq!(round.hand_sizes, [19, 17]);
    assert_eq!(round.played.len(), 2);
    assert_eq!(round.played[0].card, card(Rank::Six, Suit::Hearts));
    assert_eq!(round.played[1].card, card(Rank::Six, Suit::Diamonds));

    let hand: Vec<Card> = game.player(0).unwrap().cards().copied().collect();
    assert_eq!(hand.len(), 19);
    assert_eq!(hand[0], card(Rank::Six, Suit::Clubs));
    assert_eq!(
        &hand[17..],
        &[
            card(Rank::Six, Suit::Hearts),
            card(Rank::Six, Suit::Diamonds)
        ]
    );
}

#[test]
fn end_to_end_with_known_deck() {
    let mut game = ordered_game(GameOptions::default().with_player_names("Ann", "Ivan"));
    assert_eq!(game.total_cards(), 36);

    let mut rounds = 0;
    while !game.is_over() {
        let round = game.play_round().unwrap();
        rounds += 1;
        assert_eq!(round.winner_name, "Ann");
        assert_eq!(round.hand_sizes.iter().sum::<usize>(), 36);
        assert_eq!(game.total_cards(), 36);
    }

    assert_eq!(rounds, 18);
    let result = game.result().unwrap();
    assert_eq!(result.winner_seat, 0);
    assert_eq!(result.winner_name, "Ann");
    assert_eq!(result.rounds_played, 18);
    assert!(!result.round_limit_reached);
    assert_eq!(result.scores[0].cards, 36);
    assert_eq!(result.scores[1].cards, 0);
    assert_eq!(result.scores[1].name, "Ivan");
}

#[test]
fn end_to_end_with_seeded_deck() {
    let deck = shuffled_deck(42);
    let mut game = Game::new(GameOptions::default(), 42).unwrap();

    let first: Vec<Card> = game.player(0).unwrap().cards().copied().collect();
    let second: Vec<Card> = game.player(1).unwrap().cards().copied().collect();
    assert_eq!(first, deck.iter().copied().step_by(2).collect::<Vec<_>>());
    assert_eq!(
        second,
        deck.iter().copied().skip(1).step_by(2).collect::<Vec<_>>()
    );
    assert_eq!(
        &first[..3],
        &[
            card(Rank::Seven, Suit::Spades),
            card(Rank::Eight, Suit::Spades),
            card(Rank::King, Suit::Diamonds),
        ]
    );
    assert_eq!(
        &second[..3],
        &[
            card(Rank::King, Suit::Hearts),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Ace, Suit::Clubs),
        ]
    );

    while !game.is_over() {
        let round = game.play_round().unwrap();
        assert_eq!(round.hand_sizes.iter().sum::<usize>(), 36);
        assert_eq!(game.total_cards(), 36);
    }

    let result = game.result().unwrap();
    assert_eq!(result.winner_name, "Player 1");
    assert_eq!(result.rounds_played, 18);
    assert_eq!(result.scores[0].cards, 36);
    assert_eq!(result.scores[1].cards, 0);
}

#[test]
fn tied_final_count_goes_to_first_seat() {
    // Seat 0 takes round 1 (6♦ over 6♥), seat 1 takes round 2 (6♠ over 6♣).
    let mut deck = build_deck();
    deck.swap(0, 1);
    let options = GameOptions::default()
        .with_round_rule(RoundRule::HighestCard)
        .with_max_rounds(2);
    let mut game = Game::with_deck(options, deck).unwrap();

    let result = game.run().unwrap();
    assert!(result.round_limit_reached);
    assert_eq!(result.rounds_played, 2);
    assert_eq!(result.scores[0].cards, 18);
    assert_eq!(result.scores[1].cards, 18);
    assert_eq!(result.winner_seat, 0);
    assert_eq!(result.winner_name, "Player 1");
}

#[test]
fn last_card_ends_game_before_another_play() {
    let mut game = ordered_game(GameOptions::default());

    for _ in 0..17 {
        game.play_round().unwrap();
    }
    assert_eq!(game.state(), GameState::RoundLoop);
    assert_eq!(game.player(1).unwrap().card_count(), 1);

    let last = game.play_round().unwrap();
    assert_eq!(last.hand_sizes, [36, 0]);
    assert_eq!(game.state(), GameState::Finished);

    assert_eq!(game.play_round().unwrap_err(), PlayError::InvalidState);
    assert_eq!(game.total_cards(), 36);
}

#[test]
fn run_reports_rounds_and_winner_to_observer() {
    let mut game = Game::new(GameOptions::default(), 9).unwrap();
    let mut recorder = Recorder::default();

    let result = game.run_with(&mut recorder).unwrap();

    assert_eq!(recorder.round_winners.len(), 18);
    assert!(recorder.round_winners.iter().all(|name| name == "Player 1"));
    assert_eq!(recorder.game_winners, ["Player 1"]);
    assert_eq!(result.winner_name, "Player 1");
}

#[test]
fn run_on_finished_game_returns_same_result() {
    let mut game = Game::new(GameOptions::default(), 5).unwrap();
    let first = game.run().unwrap();
    let second = game.run().unwrap();
    assert_eq!(first, second);
    assert_eq!(game.rounds_played(), 18);
}

#[test]
fn highest_card_rule_compares_cards() {
    let options = GameOptions::default().with_round_rule(RoundRule::HighestCard);
    let mut game = ordered_game(options);

    // Each odd ordinal beats the even ordinal just below it.
    let round = game.play_round().unwrap();
    assert_eq!(round.winner_seat, 1);

    let result = game.run().unwrap();
    assert_eq!(result.winner_seat, 1);
    assert_eq!(result.winner_name, "Player 2");
    assert_eq!(result.rounds_played, 18);
    assert_eq!(result.scores[1].cards, 36);
}

#[test]
fn round_cap_finishes_game_and_scores_by_count() {
    let options = GameOptions::default()
        .with_round_rule(RoundRule::HighestCard)
        .with_max_rounds(5);
    let mut game = ordered_game(options);

    let result = game.run().unwrap();
    assert!(result.round_limit_reached);
    assert_eq!(result.rounds_played, 5);
    assert_eq!(result.scores[0].cards, 13);
    assert_eq!(result.scores[1].cards, 23);
    assert_eq!(result.winner_name, "Player 2");
    assert_eq!(game.state(), GameState::Finished);
}

proptest! {
    #[test]
    fn default_rule_always_finishes_in_eighteen_rounds(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default(), seed).unwrap();
        while !game.is_over() {
            game.play_round().unwrap();
            prop_assert_eq!(game.total_cards(), 36);
            prop_assert!(game.rounds_played() <= 18);
        }
        let result = game.result().unwrap();
        prop_assert_eq!(result.rounds_played, 18);
        prop_assert_eq!(result.winner_seat, 0);
    }

    #[test]
    fn highest_card_rule_conserves_cards(seed in any::<u64>()) {
        let options = GameOptions::default()
            .with_round_rule(RoundRule::HighestCard)
            .with_max_rounds(300);
        let mut game = Game::new(options, seed).unwrap();
        while !game.is_over() {
            let round = game.play_round().unwrap();
            prop_assert_eq!(round.hand_sizes.iter().sum::<usize>(), 36);
        }
        let result = game.result().unwrap();
        prop_assert!(result.rounds_played <= 300);
        let best = result.scores.iter().map(|s| s.cards).max().unwrap();
        prop_assert_eq!(result.scores[result.winner_seat].cards, best);
    }
}
