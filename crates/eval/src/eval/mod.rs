// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides [evaluate_hand] that classifies exactly 5 cards into one of the
//! ten [HandRank] classes together with a tie-break key, the [compare_hands]
//! total order over evaluations, and [best_hand] that searches all the 21
//! five cards subsets of a 7 cards hand.
use thiserror::Error;

mod hand;
pub use hand::{HandEvaluation, HandRank, compare_hands, evaluate_hand};

mod best;
pub use best::best_hand;

/// Evaluation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The evaluator was called with other than 5 cards.
    #[error("a hand must have exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The best hand selector was called with other than 7 cards.
    #[error("best hand search needs exactly 7 cards, got {0}")]
    InvalidInputSize(usize),
}
