// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand out of 7 cards.
use drawpoker_cards::Card;

use super::{Error, HandEvaluation};

/// Returns the best 5 cards hand out of exactly 7 cards.
///
/// All the 21 subsets are evaluated, each subset is obtained by leaving out
/// two of the seven cards. When more than one subset has the best evaluation
/// the first one found is returned.
///
/// Returns [Error::InvalidInputSize] if `cards` doesn't contain exactly 7 cards.
pub fn best_hand(cards: &[Card]) -> Result<HandEvaluation, Error> {
    let cards = <[Card; 7]>::try_from(cards).map_err(|_| Error::InvalidInputSize(cards.len()))?;

    // Start with the hand that leaves out the first two cards.
    let mut best = HandEvaluation::new([cards[2], cards[3], cards[4], cards[5], cards[6]]);

    for skip1 in 0..7 {
        for skip2 in (skip1 + 1)..7 {
            let mut hand = [cards[0]; 5];
            let subset = (0..7).filter(|&i| i != skip1 && i != skip2);
            for (slot, idx) in hand.iter_mut().zip(subset) {
                *slot = cards[idx];
            }

            let eval = HandEvaluation::new(hand);
            if eval > best {
                best = eval;
            }
        }
    }

    Ok(best)
}
