// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit counts used to find the best hand category.
use std::iter;

use super::{HandCategory, HandValue, TieBreak};
use crate::{Card, Rank, Suit};

/// The Ace to Five straight.
const WHEEL: u16 =
    Rank::Ace.bit() | Rank::Two.bit() | Rank::Three.bit() | Rank::Four.bit() | Rank::Five.bit();

/// Number of cards with the same suit needed for a flush.
const FLUSH_LEN: u32 = 5;

/// Cards grouped by rank and suit.
///
/// Each `find_*` method checks for a single category and returns its value
/// if the cards contain it, a category check doesn't exclude stronger
/// categories so they must be called strongest first.
pub(super) struct Hand {
    /// Number of cards for each rank.
    counts: [u8; Rank::COUNT],
    /// Bit mask of all the ranks in the hand.
    ranks: u16,
    /// Bit mask of the ranks for each suit.
    suits: [u16; Suit::COUNT],
}

impl Hand {
    pub(super) fn new(cards: &[Card]) -> Self {
        let mut hand = Hand {
            counts: [0; Rank::COUNT],
            ranks: 0,
            suits: [0; Suit::COUNT],
        };

        for card in cards {
            let (rank, suit) = (card.rank(), card.suit());
            hand.counts[rank as usize] += 1;
            hand.ranks |= rank.bit();
            hand.suits[suit as usize] |= rank.bit();
        }

        hand
    }

    pub(super) fn find_straight_flush(&self) -> Option<HandValue> {
        self.flush_suits()
            .filter_map(|(_, mask)| straight_top(mask))
            .max()
            .map(|top| HandValue::new(HandCategory::StraightFlush, [top]))
    }

    pub(super) fn find_four_of_a_kind(&self) -> Option<HandValue> {
        let quads = self.highest_with_count(4, &[])?;
        let exclude = [quads];
        let ranks = iter::once(quads).chain(self.kickers(&exclude).take(1));
        Some(HandValue::new(HandCategory::FourOfAKind, ranks))
    }

    pub(super) fn find_full_house(&self) -> Option<HandValue> {
        let trips = self.highest_with_count(3, &[])?;
        let pair = self.highest_with_count(2, &[trips])?;
        Some(HandValue::new(HandCategory::FullHouse, [trips, pair]))
    }

    pub(super) fn find_flush(&self) -> Option<HandValue> {
        self.flush_suits()
            .map(|(_, mask)| flush_ranks(mask))
            .max()
            .map(|tiebreak| HandValue {
                category: HandCategory::Flush,
                tiebreak,
            })
    }

    pub(super) fn find_straight(&self) -> Option<HandValue> {
        straight_top(self.ranks).map(|top| HandValue::new(HandCategory::Straight, [top]))
    }

    pub(super) fn find_three_of_a_kind(&self) -> Option<HandValue> {
        let trips = self.highest_with_count(3, &[])?;
        let exclude = [trips];
        let ranks = iter::once(trips).chain(self.kickers(&exclude).take(2));
        Some(HandValue::new(HandCategory::ThreeOfAKind, ranks))
    }

    pub(super) fn find_two_pair(&self) -> Option<HandValue> {
        let high = self.highest_with_count(2, &[])?;
        let low = self.highest_with_count(2, &[high])?;
        let exclude = [high, low];
        let ranks = exclude.into_iter().chain(self.kickers(&exclude).take(1));
        Some(HandValue::new(HandCategory::TwoPair, ranks))
    }

    pub(super) fn find_pair(&self) -> Option<HandValue> {
        let pair = self.highest_with_count(2, &[])?;
        let exclude = [pair];
        let ranks = iter::once(pair).chain(self.kickers(&exclude).take(3));
        Some(HandValue::new(HandCategory::Pair, ranks))
    }

    pub(super) fn high_card(&self) -> HandValue {
        HandValue::new(HandCategory::HighCard, self.kickers(&[]).take(5))
    }

    /// The suit that makes the given flush or straight flush value.
    pub(super) fn flush_suit(&self, value: &HandValue) -> Option<Suit> {
        self.flush_suits()
            .find(|&(_, mask)| match value.category {
                HandCategory::StraightFlush => {
                    straight_top(mask).as_ref() == value.tiebreak.as_slice().first()
                }
                HandCategory::Flush => flush_ranks(mask) == value.tiebreak,
                _ => false,
            })
            .map(|(suit, _)| suit)
    }

    /// The highest rank with at least `count` cards that is not excluded.
    fn highest_with_count(&self, count: u8, exclude: &[Rank]) -> Option<Rank> {
        Rank::ranks()
            .rev()
            .find(|r| self.counts[*r as usize] >= count && !exclude.contains(r))
    }

    /// The ranks in the hand from highest to lowest, skipping excluded ranks.
    fn kickers<'a>(&'a self, exclude: &'a [Rank]) -> impl Iterator<Item = Rank> + 'a {
        ranks_desc(self.ranks).filter(move |r| !exclude.contains(r))
    }

    /// The suits with enough cards for a flush and their ranks mask.
    fn flush_suits(&self) -> impl Iterator<Item = (Suit, u16)> + '_ {
        Suit::suits()
            .map(|s| (s, self.suits[s as usize]))
            .filter(|(_, mask)| mask.count_ones() >= FLUSH_LEN)
    }
}

/// The ranks set in a mask from highest to lowest.
fn ranks_desc(mask: u16) -> impl Iterator<Item = Rank> {
    Rank::ranks().rev().filter(move |r| mask & r.bit() != 0)
}

/// The five highest ranks of a flush.
fn flush_ranks(mask: u16) -> TieBreak {
    TieBreak::from_ranks(ranks_desc(mask).take(5))
}

/// Returns the top rank of the highest straight in a ranks mask.
///
/// The wheel (A2345) is a straight with Five as top rank.
pub(super) fn straight_top(mask: u16) -> Option<Rank> {
    let mut run = 0;
    let mut top = None;

    for rank in Rank::ranks().rev() {
        if mask & rank.bit() == 0 {
            run = 0;
            continue;
        }

        if run == 0 {
            top = Some(rank);
        }

        run += 1;
        if run == 5 {
            return top;
        }
    }

    (mask & WHEEL == WHEEL).then_some(Rank::Five)
}

/// The ranks of the straight with the given top rank, the Ace is the last
/// rank for a wheel.
pub(super) fn straight_ranks(top: Rank) -> impl Iterator<Item = Rank> {
    let wheel = top == Rank::Five;
    (0..5).filter_map(move |i| {
        if wheel && i == 4 {
            Some(Rank::Ace)
        } else {
            (top as usize).checked_sub(i).and_then(Rank::from_index)
        }
    })
}
