// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawpoker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use drawpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! Cards are dealt from the front of the deck and never come back until the
//! deck is reset:
//!
//! ```
//! # use drawpoker_cards::{Deck, DeckError};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.deal(7).unwrap();
//! assert_eq!(hand.len(), 7);
//! assert_eq!(deck.count(), 45);
//! assert!(matches!(deck.deal(46), Err(DeckError::InsufficientCards { .. })));
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use drawpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, ParseCardError, Rank, Suit, for_each_subset};
