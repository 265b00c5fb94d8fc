// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Full games played with random player choices.
use ahash::HashSet;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use drawpoker_core::{
    Deck, Game, GameState, HAND_SIZE, MAX_DISCARDS, Phase, SUBMIT_SIZE, TOTAL_ROUNDS, Winner,
};

// Cards held by hands and piles are unique and with the deck make a full deck.
fn check_custody(state: &GameState) {
    let cards = state
        .player_hand()
        .iter()
        .chain(state.ai_hand())
        .chain(state.discarded())
        .chain(state.played())
        .collect::<Vec<_>>();
    let unique = cards.iter().collect::<HashSet<_>>();

    assert_eq!(unique.len(), cards.len());
    assert_eq!(cards.len() + state.deck_count(), Deck::SIZE);
}

// Plays a game choosing random cards and actions, including invalid ones.
fn play_game(game: &mut Game, rng: &mut StdRng) {
    for round in 1..=TOTAL_ROUNDS {
        let state = game.start_new_round();
        assert_eq!(state.round(), round);
        assert_eq!(state.player_hand().len(), HAND_SIZE);
        assert_eq!(state.ai_hand().len(), HAND_SIZE);
        check_custody(state);

        let discarded = state.discarded().len();
        let hand = state.player_hand().to_vec();
        let count = rng.random_range(0..=MAX_DISCARDS + 1);
        for card in hand.choose_multiple(rng, count) {
            game.select_card_for_discard(*card);
        }

        let selected = game.state().selected_for_discard().len();
        assert!(selected <= MAX_DISCARDS);

        let (state, player_discards) = if selected == 0 || rng.random_bool(0.2) {
            (game.play_hand_without_discard(), 0)
        } else {
            (game.confirm_discard(), selected)
        };
        assert!(matches!(state.phase(), Phase::Submitting { .. }));
        assert_eq!(state.player_hand().len(), HAND_SIZE);
        assert_eq!(state.ai_hand().len(), HAND_SIZE);

        // The computer never discards more than two cards.
        let ai_discards = state.discarded().len() - discarded - player_discards;
        assert!(ai_discards <= MAX_DISCARDS);
        check_custody(state);

        let hand = state.player_hand().to_vec();
        for card in hand.choose_multiple(rng, SUBMIT_SIZE) {
            game.select_card_for_submit(*card);
        }

        // Out of phase.
        game.continue_after_reveal();

        let state = game.confirm_submit();
        assert!(matches!(state.phase(), Phase::Revealing));
        assert_eq!(state.results().len(), round as usize);
        check_custody(state);

        game.continue_after_reveal();
    }
}

#[test]
fn random_games() {
    let mut rng = StdRng::seed_from_u64(42);

    for seed in 0..50 {
        let mut game = Game::with_seed(seed);
        play_game(&mut game, &mut rng);

        let state = game.state();
        assert!(matches!(state.phase(), Phase::GameEnd));
        assert_eq!(
            state.player_wins() + state.ai_wins() + state.ties(),
            TOTAL_ROUNDS
        );

        let winner = state.game_winner().unwrap();
        match winner {
            Winner::Player => assert!(state.player_wins() > state.ai_wins()),
            Winner::Ai => assert!(state.player_wins() < state.ai_wins()),
            Winner::Tie => assert_eq!(state.player_wins(), state.ai_wins()),
        }

        // Play another game after the reset.
        game.reset_game();
        play_game(&mut game, &mut rng);
        assert!(game.state().is_game_over());
    }
}

#[test]
fn state_to_json() {
    let mut game = Game::with_seed(5);
    game.start_new_round();
    game.play_hand_without_discard();

    let hand = game.state().player_hand().to_vec();
    for card in &hand[..SUBMIT_SIZE] {
        game.select_card_for_submit(*card);
    }
    game.confirm_submit();

    let json = serde_json::to_value(game.state()).unwrap();
    assert_eq!(json["phase"], "Revealing");
    assert_eq!(json["round"], 1);
    assert_eq!(json["played"].as_array().unwrap().len(), 2 * SUBMIT_SIZE);

    let winner = game.state().last_result().unwrap().winner();
    let expected = serde_json::to_value(winner).unwrap();
    assert_eq!(json["results"][0]["winner"], expected);
    assert!(["player", "ai", "tie"].contains(&expected.as_str().unwrap()));

    let state: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(&state, game.state());
}
