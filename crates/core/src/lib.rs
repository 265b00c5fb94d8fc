// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawpoker game rules shared by the front ends.
//!
//! A game is played between the player and the computer over three rounds,
//! each side gets seven cards, can discard up to two of them and then plays
//! five of them as a poker hand.
//!
//! ```
//! use drawpoker_core::{Game, Phase};
//!
//! let mut game = Game::with_seed(7);
//! let state = game.start_new_round();
//! assert_eq!(state.player_hand().len(), 7);
//!
//! let state = game.play_hand_without_discard();
//! assert!(matches!(state.phase(), Phase::Submitting { .. }));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod game;
pub mod game_state;
pub mod strategy;

pub use game::{Action, Error, Game};
pub use game_state::{
    GameState, HAND_SIZE, MAX_DISCARDS, Phase, RoundResult, SUBMIT_SIZE, TOTAL_ROUNDS, Winner,
};
pub use strategy::{ComputerAction, computer_action};

pub use drawpoker_eval::{Card, Deck, HandEvaluation, HandRank, Rank, Suit, best_hand};
