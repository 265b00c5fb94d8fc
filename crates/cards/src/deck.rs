// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Deck errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than the deck holds.
    #[error("cannot deal {requested} cards, {remaining} remaining")]
    InsufficientCards {
        /// The number of cards requested.
        requested: usize,
        /// The number of cards left in the deck.
        remaining: usize,
    },
}

/// Error returned when parsing a card from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card '{0}'")]
pub struct ParseCardError(String);

/// A Poker card.
///
/// A card is an immutable (rank, suit) pair, two cards are equal if and only
/// if both rank and suit match.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// This card unique id in the range `0..52`.
    pub fn id(&self) -> usize {
        self.suit as usize * 13 + (self.rank as usize - 2)
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `AH`, `td`, `10S` or `2c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseCardError(s.to_string());

        let mut chars = s.chars();
        let suit = chars.next_back().ok_or_else(err)?;
        let rank = chars.as_str();

        let rank = match rank.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(err()),
        };

        let suit = match suit.to_ascii_uppercase() {
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            _ => return Err(err()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank, the discriminant is the rank value with Ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value from 2 to 14.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }

    /// The unicode symbol for this suit.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Checks if this is a red suit.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// A cards Deck.
///
/// Cards are dealt from the front of the deck, every dealt card is removed
/// from the deck until the deck is [reset](Deck::reset).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Regenerates all the 52 cards and shuffles them.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new_and_shuffled(rng);
    }

    /// Deals `n` cards from the front of the deck.
    ///
    /// The deck is left untouched if it has fewer than `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Draws the front card, returns `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is still in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Returns the cards left in the deck in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each k-cards hand in this deck.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        for_each_subset(&self.cards, k, f);
    }
}

/// Calls the `f` closure for each k-cards subset of `cards`.
///
/// Subsets are visited in lexicographic index order, each card appears in the
/// subset in the same order it has in `cards`.
///
/// Panics if k is not 2 <= k <= 7.
pub fn for_each_subset<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card]),
{
    assert!((2..=7).contains(&k), "2 <= k <= 7");

    if k > cards.len() {
        return;
    }

    let n = cards.len();
    let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];

    for c1 in 0..n {
        h[0] = cards[c1];

        for c2 in (c1 + 1)..n {
            h[1] = cards[c2];

            if k == 2 {
                f(&h[0..k]);
                continue;
            }

            for c3 in (c2 + 1)..n {
                h[2] = cards[c3];

                if k == 3 {
                    f(&h[0..k]);
                    continue;
                }

                for c4 in (c3 + 1)..n {
                    h[3] = cards[c4];

                    if k == 4 {
                        f(&h[0..k]);
                        continue;
                    }

                    for c5 in (c4 + 1)..n {
                        h[4] = cards[c5];

                        if k == 5 {
                            f(&h[0..k]);
                            continue;
                        }

                        for c6 in (c5 + 1)..n {
                            h[5] = cards[c6];

                            if k == 6 {
                                f(&h[0..k]);
                                continue;
                            }

                            for c7 in (c6 + 1)..n {
                                h[6] = cards[c7];
                                f(&h[0..k]);
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn card_ids() {
        let mut ids = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.draw() {
            assert!(card.id() < Deck::SIZE);
            ids.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(ids.len(), Deck::SIZE);

        assert_eq!(Card::new(Rank::Deuce, Suit::Hearts).id(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).id(), 51);
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert!(Rank::Ace > Rank::King);
        assert_eq!(Rank::ranks().count(), 13);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        assert_eq!("KD".parse::<Card>(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("td".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("10s".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!(" 2c ".parse::<Card>(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));

        assert!("1H".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
        assert!("H".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());

        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn deck_deal_from_front() {
        let mut deck = Deck::default();
        let front = deck.cards()[..3].to_vec();

        let cards = deck.deal(3).unwrap();
        assert_eq!(cards, front);
        assert_eq!(deck.count(), Deck::SIZE - 3);
        assert!(cards.iter().all(|c| !deck.contains(*c)));

        let next = deck.cards()[0];
        assert_eq!(deck.draw(), Some(next));
        assert_eq!(deck.count(), Deck::SIZE - 4);
    }

    #[test]
    fn deck_insufficient_cards() {
        let mut deck = Deck::default();
        deck.deal(50).unwrap();

        let err = deck.deal(3).unwrap_err();
        assert_eq!(
            err,
            DeckError::InsufficientCards {
                requested: 3,
                remaining: 2
            }
        );

        // A failed deal leaves the deck untouched.
        assert_eq!(deck.count(), 2);
        assert_eq!(deck.deal(2).unwrap().len(), 2);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.deal(0), Ok(vec![]));
    }

    #[test]
    fn deck_reset() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        deck.deal(20).unwrap();

        deck.reset(&mut rng);
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_shuffle_is_seeded() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(43));

        assert_eq!(d1.cards(), d2.cards());
        assert_ne!(d1.cards(), d3.cards());
        assert_ne!(d1.cards(), Deck::default().cards());
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        assert!(deck.contains(ad));

        deck.remove(ad);
        assert!(!deck.contains(ad));
        assert_eq!(deck.count(), Deck::SIZE - 1);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn subsets_of_seven() {
        let cards = Deck::default().into_iter().take(7).collect::<Vec<_>>();

        let mut subsets = HashSet::default();
        for_each_subset(&cards, 5, |hand| {
            assert!(hand.iter().all(|c| cards.contains(c)));
            subsets.insert(hand.to_owned());
        });
        assert_eq!(subsets.len(), 21);

        let mut count = 0;
        for_each_subset(&cards, 7, |hand| {
            assert_eq!(hand, cards.as_slice());
            count += 1;
        });
        assert_eq!(count, 1);

        // Not enough cards for a subset.
        let mut count = 0;
        for_each_subset(&cards[..4], 5, |_| count += 1);
        assert_eq!(count, 0);
    }
}
