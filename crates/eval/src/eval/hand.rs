// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluation.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use drawpoker_cards::{Card, Rank};

use super::Error;

/// The hand rank class, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all hand ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The hand rank name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The evaluation of a 5 cards hand.
///
/// Evaluations are compared by rank class first and then by the tie-break
/// key, two evaluations with the same class and key are equal even if they
/// hold different cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandEvaluation {
    rank: HandRank,
    cards: [Card; 5],
    kickers: Vec<Rank>,
}

impl HandEvaluation {
    /// Evaluates 5 cards.
    pub fn new(mut cards: [Card; 5]) -> Self {
        cards.sort_by(|c1, c2| c2.rank().cmp(&c1.rank()));

        let ranks = cards.map(|c| c.rank());
        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());

        // (count, rank) sorted by count and then by rank, both descending.
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank as usize] += 1;
        }

        let mut groups = Rank::ranks()
            .rev()
            .filter(|r| counts[*r as usize] > 0)
            .map(|r| (counts[r as usize], r))
            .collect::<Vec<_>>();
        groups.sort_by(|g1, g2| g2.0.cmp(&g1.0));

        let is_wheel = ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];
        let is_straight =
            groups.len() == 5 && (ranks[0].value() - ranks[4].value() == 4 || is_wheel);

        // The Ace plays low only in the wheel.
        let high = if is_wheel { Rank::Five } else { ranks[0] };

        let shape = groups.iter().map(|g| g.0).collect::<Vec<_>>();
        let grouped = || groups.iter().map(|g| g.1).collect::<Vec<_>>();

        let (rank, kickers) = if is_straight && is_flush && ranks[4] == Rank::Ten {
            (HandRank::RoyalFlush, vec![])
        } else if is_straight && is_flush {
            (HandRank::StraightFlush, vec![high])
        } else if shape == [4, 1] {
            (HandRank::FourOfAKind, grouped())
        } else if shape == [3, 2] {
            (HandRank::FullHouse, grouped())
        } else if is_flush {
            (HandRank::Flush, ranks.to_vec())
        } else if is_straight {
            (HandRank::Straight, vec![high])
        } else if shape == [3, 1, 1] {
            (HandRank::ThreeOfAKind, grouped())
        } else if shape == [2, 2, 1] {
            (HandRank::TwoPair, grouped())
        } else if shape == [2, 1, 1, 1] {
            (HandRank::OnePair, grouped())
        } else {
            (HandRank::HighCard, ranks.to_vec())
        };

        Self {
            rank,
            cards,
            kickers,
        }
    }

    /// The hand rank class.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand cards sorted by descending rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The tie-break key used to compare hands with the same rank.
    pub fn kickers(&self) -> &[Rank] {
        &self.kickers
    }

    /// The hand rank name.
    pub fn name(&self) -> &'static str {
        self.rank.name()
    }
}

impl PartialEq for HandEvaluation {
    fn eq(&self, other: &Self) -> bool {
        compare_hands(self, other) == Ordering::Equal
    }
}

impl Eq for HandEvaluation {}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// Evaluates a 5 cards hand.
///
/// Returns [Error::InvalidHandSize] if `cards` doesn't contain exactly 5 cards.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandEvaluation, Error> {
    let cards = <[Card; 5]>::try_from(cards).map_err(|_| Error::InvalidHandSize(cards.len()))?;
    Ok(HandEvaluation::new(cards))
}

/// Compares two evaluations by rank class and then by tie-break key.
///
/// Keys are compared element by element, a missing element counts as 0.
pub fn compare_hands(h1: &HandEvaluation, h2: &HandEvaluation) -> Ordering {
    h1.rank.cmp(&h2.rank).then_with(|| {
        let len = h1.kickers.len().max(h2.kickers.len());
        (0..len)
            .map(|i| {
                let k1 = h1.kickers.get(i).map_or(0, Rank::value);
                let k2 = h2.kickers.get(i).map_or(0, Rank::value);
                k1.cmp(&k2)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}
