// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game state snapshot types.
use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use drawpoker_eval::{Card, HandEvaluation, compare_hands};

/// The number of rounds in a game.
pub const TOTAL_ROUNDS: u8 = 3;
/// The number of cards in a full hand.
pub const HAND_SIZE: usize = 7;
/// The maximum number of cards a side can discard in a round.
pub const MAX_DISCARDS: usize = 2;
/// The number of cards a side submits at the end of a round.
pub const SUBMIT_SIZE: usize = 5;

/// The game phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the next round to start.
    Dealing,
    /// The player selects up to two cards to discard.
    Discarding {
        /// The cards selected for discard.
        selected: Vec<Card>,
    },
    /// The player selects the five cards to play.
    Submitting {
        /// The cards selected for submission.
        selected: Vec<Card>,
        /// The computer locked submission.
        ai_submission: Vec<Card>,
    },
    /// Both hands are shown with the round result.
    Revealing,
    /// All rounds have been played.
    GameEnd,
}

impl Phase {
    /// The phase name.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Dealing => "dealing",
            Phase::Discarding { .. } => "discarding",
            Phase::Submitting { .. } => "submitting",
            Phase::Revealing => "revealing",
            Phase::GameEnd => "game end",
        }
    }
}

/// The winner of a round or of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// The human player.
    Player,
    /// The computer.
    Ai,
    /// Both sides have equal hands.
    Tie,
}

impl Winner {
    fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Winner::Player,
            Ordering::Less => Winner::Ai,
            Ordering::Equal => Winner::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Winner::Player => "You win",
            Winner::Ai => "Computer wins",
            Winner::Tie => "Tie",
        };

        write!(f, "{s}")
    }
}

/// The outcome of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    player_hand: HandEvaluation,
    ai_hand: HandEvaluation,
    winner: Winner,
}

impl RoundResult {
    /// Creates a result by comparing the two submitted hands.
    pub fn new(player_hand: HandEvaluation, ai_hand: HandEvaluation) -> Self {
        let winner = Winner::from_ordering(compare_hands(&player_hand, &ai_hand));
        Self {
            player_hand,
            ai_hand,
            winner,
        }
    }

    /// The player submitted hand.
    pub fn player_hand(&self) -> &HandEvaluation {
        &self.player_hand
    }

    /// The computer submitted hand.
    pub fn ai_hand(&self) -> &HandEvaluation {
        &self.ai_hand
    }

    /// The round winner.
    pub fn winner(&self) -> Winner {
        self.winner
    }
}

/// A snapshot of the game.
///
/// The state is only mutated by [crate::Game] transitions, renderers get a
/// shared reference or a clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) phase: Phase,
    pub(crate) round: u8,
    pub(crate) player_wins: u8,
    pub(crate) ai_wins: u8,
    pub(crate) player_hand: Vec<Card>,
    pub(crate) ai_hand: Vec<Card>,
    pub(crate) discarded: Vec<Card>,
    pub(crate) played: Vec<Card>,
    pub(crate) deck_count: usize,
    pub(crate) results: Vec<RoundResult>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: Phase::Dealing,
            round: 1,
            player_wins: 0,
            ai_wins: 0,
            player_hand: Vec::default(),
            ai_hand: Vec::default(),
            discarded: Vec::default(),
            played: Vec::default(),
            deck_count: 0,
            results: Vec::default(),
        }
    }
}

impl GameState {
    /// The current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The current round, starting from 1.
    pub fn round(&self) -> u8 {
        self.round
    }

    /// The number of rounds won by the player.
    pub fn player_wins(&self) -> u8 {
        self.player_wins
    }

    /// The number of rounds won by the computer.
    pub fn ai_wins(&self) -> u8 {
        self.ai_wins
    }

    /// The number of tied rounds.
    pub fn ties(&self) -> u8 {
        self.results
            .iter()
            .filter(|r| r.winner == Winner::Tie)
            .count() as u8
    }

    /// The player cards.
    pub fn player_hand(&self) -> &[Card] {
        &self.player_hand
    }

    /// The computer cards.
    pub fn ai_hand(&self) -> &[Card] {
        &self.ai_hand
    }

    /// The cards the player selected for discard, empty outside discarding.
    pub fn selected_for_discard(&self) -> &[Card] {
        match &self.phase {
            Phase::Discarding { selected } => selected,
            _ => &[],
        }
    }

    /// The cards the player selected for submission, empty outside submitting.
    pub fn selected_for_submit(&self) -> &[Card] {
        match &self.phase {
            Phase::Submitting { selected, .. } => selected,
            _ => &[],
        }
    }

    /// The computer locked submission while submitting.
    pub fn ai_submission(&self) -> Option<&[Card]> {
        match &self.phase {
            Phase::Submitting { ai_submission, .. } => Some(ai_submission),
            _ => None,
        }
    }

    /// Cards discarded by both sides in this game.
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Cards submitted by both sides in this game.
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// The number of cards left in the deck, zero before the first deal.
    pub fn deck_count(&self) -> usize {
        self.deck_count
    }

    /// All the round results in play order.
    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    /// The last round result.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.results.last()
    }

    /// Checks if all rounds have been played.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameEnd)
    }

    /// The game winner, only available when the game is over.
    pub fn game_winner(&self) -> Option<Winner> {
        self.is_game_over()
            .then(|| Winner::from_ordering(self.player_wins.cmp(&self.ai_wins)))
    }
}
