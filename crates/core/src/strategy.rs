// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Computer player strategy.
use drawpoker_eval::{Card, Error, HandEvaluation, best_hand};

use crate::game_state::MAX_DISCARDS;

/// The computer decision for a 7 cards hand.
#[derive(Debug, Clone)]
pub struct ComputerAction {
    /// The best 5 cards hand.
    pub best_hand: HandEvaluation,
    /// The cards to discard, never more than [MAX_DISCARDS].
    pub discards: Vec<Card>,
    /// The cards to submit, the same cards as the best hand.
    pub submission: Vec<Card>,
}

/// Computes the computer discards and submission for a 7 cards hand.
///
/// The discards are the cards left out of the best hand, in hand order.
pub fn computer_action(hand: &[Card]) -> Result<ComputerAction, Error> {
    let best_hand = best_hand(hand)?;

    let discards = hand
        .iter()
        .filter(|c| !best_hand.cards().contains(c))
        .take(MAX_DISCARDS)
        .copied()
        .collect();
    let submission = best_hand.cards().to_vec();

    Ok(ComputerAction {
        best_hand,
        discards,
        submission,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawpoker_eval::{Deck, HandRank};
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(cards: &str) -> Vec<Card> {
        cards
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect()
    }

    #[test]
    fn discards_cards_out_of_best_hand() {
        let hand = cards("AS 2C AH KS 3D AD KH");
        let action = computer_action(&hand).unwrap();

        assert_eq!(action.best_hand.rank(), HandRank::FullHouse);
        assert_eq!(action.discards, cards("2C 3D"));
        assert_eq!(action.submission, action.best_hand.cards());
    }

    #[test]
    fn invalid_hand_size() {
        let hand = cards("AS 2C AH KS 3D");
        assert!(matches!(
            computer_action(&hand),
            Err(Error::InvalidInputSize(5))
        ));
    }

    #[test]
    fn random_hands() {
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..100 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let hand = deck.deal(7).unwrap();
            let action = computer_action(&hand).unwrap();

            assert_eq!(action.discards.len(), MAX_DISCARDS);
            assert_eq!(action.submission.len(), 5);

            // Discards and submission partition the hand.
            assert!(action.discards.iter().all(|c| !action.submission.contains(c)));
            assert!(
                hand.iter()
                    .all(|c| action.discards.contains(c) || action.submission.contains(c))
            );

            // The same hand gives the same decision.
            let again = computer_action(&hand).unwrap();
            assert_eq!(again.discards, action.discards);
            assert_eq!(again.submission, action.submission);
        }
    }
}
