// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator and winners resolver.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. A hand evaluates to a
//! [HandValue] with the hand category and the ranks that break ties between
//! hands of the same category:
//!
//! ```
//! # use showdown_eval::*;
//! // 2S, 3S, .., JS
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert_eq!(v1.category(), HandCategory::StraightFlush);
//! assert!(v2 > v1);
//! ```
//!
//! Players sharing the same community cards are compared with
//! [resolve_winners], that returns all the players with the best hand:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = |s: &str| s.split(' ').map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
//!
//! let alice = Player::with_cards("Alice", cards("AH 2C"));
//! let bob = Player::with_cards("Bob", cards("KD 3C"));
//! let board = cards("9S 8D 7C 6H 5S");
//!
//! // The board straight plays for both players.
//! let showdown = resolve_winners([&alice, &bob], &board).unwrap();
//! assert!(showdown.is_split());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod eval;
pub use eval::{HandCategory, HandValue, TieBreak};

pub mod showdown;
pub use showdown::{Showdown, resolve_winners};

pub mod table;
pub use table::{Player, PlayerId, Table};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};

/// Evaluation and table errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A hand needs at least 5 cards.
    #[error("a hand needs at least 5 cards, got {0}")]
    InsufficientCards(usize),
    /// There are no players to compare.
    #[error("no players")]
    EmptyPlayerSet,
    /// Too many players for a table.
    #[error("a table seats at most {max} players, got {count}")]
    TooManyPlayers {
        /// The number of players.
        count: usize,
        /// The maximum number of players.
        max: usize,
    },
    /// The board has no room for more cards.
    #[error("cannot deal {count} cards on a board with {board} cards")]
    BoardFull {
        /// The board cards.
        board: usize,
        /// The cards to deal.
        count: usize,
    },
    /// A cards error.
    #[error(transparent)]
    Cards(#[from] showdown_cards::Error),
}
