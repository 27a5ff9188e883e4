// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Evaluates 5, 6, and 7 cards poker hands to a [HandValue] made of the hand
//! [HandCategory] and a [TieBreak] with the ranks that decide between two
//! hands of the same category. Hand values are totally ordered, comparing two
//! values compares the strength of the two hands.
//!
//! It provides a [HandValue::eval] method that computes a hand value without
//! extracting the best five cards, useful for computing odds and other stats,
//! and a slightly slower [HandValue::eval_with_best_hand] that also returns
//! the five best cards, useful for UIs to show a winning hand.
use serde::{Serialize, Serializer};
use std::{
    cmp::{Ordering, Reverse},
    fmt, hash,
};

use crate::{Card, Error, Rank};

mod hand;
use hand::{Hand, straight_ranks};

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
}

impl HandCategory {
    /// The number of hand categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The sizes of the rank groups that make a five cards hand of this
    /// category, one group for each tie break rank.
    fn group_sizes(self) -> &'static [usize] {
        match self {
            HandCategory::FourOfAKind => &[4, 1],
            HandCategory::FullHouse => &[3, 2],
            HandCategory::ThreeOfAKind => &[3, 1, 1],
            HandCategory::TwoPair => &[2, 2, 1],
            HandCategory::Pair => &[2, 1, 1, 1],
            _ => &[1, 1, 1, 1, 1],
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        f.pad(s)
    }
}

/// The ranks that break ties between hands of the same category, most
/// significant first.
///
/// | Category        | Ranks                        |
/// |-----------------|------------------------------|
/// | Straight Flush  | top                          |
/// | Four of a Kind  | quads, kicker                |
/// | Full House      | trips, pair                  |
/// | Flush           | five flush ranks             |
/// | Straight        | top (Five for the wheel)     |
/// | Three of a Kind | trips, kicker, kicker        |
/// | Two Pair        | high pair, low pair, kicker  |
/// | Pair            | pair, kicker, kicker, kicker |
/// | High Card       | five highest ranks           |
///
/// Tie breaks compare lexicographically.
#[derive(Debug, Clone, Copy)]
pub struct TieBreak {
    ranks: [Rank; TieBreak::MAX_LEN],
    len: u8,
}

impl TieBreak {
    /// The maximum number of ranks in a tie break.
    pub const MAX_LEN: usize = 5;

    /// Creates a tie break from the first five ranks.
    fn from_ranks(ranks: impl IntoIterator<Item = Rank>) -> Self {
        let mut tiebreak = TieBreak {
            ranks: [Rank::Two; Self::MAX_LEN],
            len: 0,
        };

        for (slot, rank) in tiebreak.ranks.iter_mut().zip(ranks) {
            *slot = rank;
            tiebreak.len += 1;
        }

        tiebreak
    }

    /// The tie break ranks.
    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl PartialEq for TieBreak {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for TieBreak {}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl hash::Hash for TieBreak {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl Serialize for TieBreak {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// The value of a poker hand.
///
/// Values compare by category first and tie break second, two hands with
/// equal values split the pot.
///
/// ```
/// # use showdown_eval::{Card, HandCategory, HandValue, Rank};
/// let cards = ["AS", "2D", "3C", "4H", "5S"].map(|c| c.parse::<Card>().unwrap());
/// let wheel = HandValue::eval(&cards).unwrap();
/// assert_eq!(wheel.category(), HandCategory::Straight);
/// assert_eq!(wheel.tiebreak().as_slice(), &[Rank::Five]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HandValue {
    category: HandCategory,
    tiebreak: TieBreak,
}

impl HandValue {
    /// The minimum number of cards to evaluate.
    pub const MIN_CARDS: usize = 5;

    /// Evaluates a hand of at least 5 cards.
    ///
    /// The value depends only on the set of cards, not on their order.
    pub fn eval(cards: &[Card]) -> Result<HandValue, Error> {
        if cards.len() < Self::MIN_CARDS {
            return Err(Error::InsufficientCards(cards.len()));
        }

        Ok(Self::eval_hand(&Hand::new(cards)))
    }

    /// Evaluates a hand and returns its value with the five cards that make
    /// the hand.
    ///
    /// The cards are ordered by group size first, so that a full house lists
    /// the trips before the pair, and by rank second. The wheel lists the Ace
    /// last.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(HandValue, [Card; 5]), Error> {
        if cards.len() < Self::MIN_CARDS {
            return Err(Error::InsufficientCards(cards.len()));
        }

        let hand = Hand::new(cards);
        let value = Self::eval_hand(&hand);

        // Sort a copy so that picks are the same for any cards order.
        let mut sorted = cards.to_vec();
        sorted.sort_by_key(|c| (Reverse(c.rank()), c.suit() as usize));

        let suit = hand.flush_suit(&value);
        let ranks: Vec<Rank> = match value.category {
            HandCategory::Straight | HandCategory::StraightFlush => value
                .tiebreak
                .as_slice()
                .first()
                .into_iter()
                .flat_map(|&top| straight_ranks(top))
                .collect(),
            _ => value.tiebreak.as_slice().to_vec(),
        };

        let picks = ranks
            .iter()
            .zip(value.category.group_sizes())
            .flat_map(|(&rank, &size)| {
                sorted
                    .iter()
                    .filter(move |c| c.rank() == rank && suit.is_none_or(|s| s == c.suit()))
                    .take(size)
            });

        let mut best = [sorted[0]; 5];
        for (slot, card) in best.iter_mut().zip(picks) {
            *slot = *card;
        }

        Ok((value, best))
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The ranks that break ties with hands of the same category.
    pub fn tiebreak(&self) -> TieBreak {
        self.tiebreak
    }

    fn new(category: HandCategory, ranks: impl IntoIterator<Item = Rank>) -> Self {
        Self {
            category,
            tiebreak: TieBreak::from_ranks(ranks),
        }
    }

    fn eval_hand(hand: &Hand) -> HandValue {
        None.or_else(|| hand.find_straight_flush())
            .or_else(|| hand.find_four_of_a_kind())
            .or_else(|| hand.find_full_house())
            .or_else(|| hand.find_flush())
            .or_else(|| hand.find_straight())
            .or_else(|| hand.find_three_of_a_kind())
            .or_else(|| hand.find_two_pair())
            .or_else(|| hand.find_pair())
            .unwrap_or_else(|| hand.high_card())
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for rank in self.tiebreak.as_slice() {
            write!(f, " {rank}")?;
        }

        Ok(())
    }
}

/// Parses a space separated list of cards.
#[cfg(test)]
pub(crate) fn parse_cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}
