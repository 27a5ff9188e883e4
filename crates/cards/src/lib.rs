// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for dealing, sampling, and iterating cards in the deck.
//!
//! Dealing pops cards until the deck runs out:
//!
//! ```
//! # use showdown_cards::{Deck, Error};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! for _ in 0..Deck::SIZE {
//!     deck.pop().unwrap();
//! }
//! assert_eq!(deck.pop(), Err(Error::EmptyDeck));
//! ```
//!
//! To sample 10 random 5-cards hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling and iteration with
//! a given number of tasks, the closure `task_id` can be used to store per
//! task data to reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use showdown_cards::Deck;
//! // Iterate through all 5 cards hands.
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod card;
pub use card::{Card, Rank, Suit};

mod deck;
pub use deck::Deck;

/// Cards errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// All the cards have been dealt.
    #[error("the deck is empty")]
    EmptyDeck,
    /// A card string that is not a rank followed by a suit.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}
