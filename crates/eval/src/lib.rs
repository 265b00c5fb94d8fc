// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawpoker hand evaluator.
//!
//! Poker hand evaluator for 5 cards hands and a best hand selector that finds
//! the strongest 5 cards hand out of 7 cards.
//!
//! To use the evaluator create a hand and use [evaluate_hand] to get its rank
//! and tie-break key, evaluations can be compared directly:
//!
//! ```
//! # use drawpoker_eval::*;
//! // 2H, 3H, .., JH
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = evaluate_hand(&cards[0..5]).unwrap();
//! let v2 = evaluate_hand(&cards[5..]).unwrap();
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert!(v2 > v1);
//! ```
//!
//! and [best_hand] to select the best hand out of 7 cards:
//!
//! ```
//! # use drawpoker_eval::*;
//! let cards = ["AS", "KS", "QS", "JS", "TS", "2H", "2D"]
//!     .iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//! let best = best_hand(&cards).unwrap();
//! assert_eq!(best.rank(), HandRank::RoyalFlush);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Error, HandEvaluation, HandRank, best_hand, compare_hands, evaluate_hand};

// Reexport cards types.
pub use drawpoker_cards::{Card, Deck, Rank, Suit};
