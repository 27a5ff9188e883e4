// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use rand::prelude::*;

use crate::{Card, Error, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;

/// A cards Deck
///
/// A deck is owned by a single dealer, cards are removed with [Deck::pop] and
/// each card is handed out at most once.
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
        deck.cards.shuffle(rng);
        deck
    }

    /// Removes a card from the top of the deck.
    pub fn pop(&mut self) -> Result<Card, Error> {
        self.cards.pop().ok_or(Error::EmptyDeck)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        self.for_each_from(0, k, &mut hand, &mut f);
    }

    fn for_each_from<F>(&self, start: usize, k: usize, hand: &mut Vec<Card>, f: &mut F)
    where
        F: FnMut(&[Card]),
    {
        if hand.len() == k {
            f(hand);
            return;
        }

        // Leave enough cards to complete the hand.
        let end = self.cards.len() - (k - hand.len());
        for idx in start..=end {
            hand.push(self.cards[idx]);
            self.for_each_from(idx + 1, k, hand, f);
            hand.pop();
        }
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<F>(&self, samples: usize, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut rng = rand::rng();
        let mut hand = Vec::with_capacity(k);

        for _ in 0..samples {
            hand.clear();
            hand.extend(self.cards.choose_multiple(&mut rng, k));
            f(&hand);
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
