// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners resolution.
use std::cmp::Ordering;

use crate::{Card, Error, HandValue, Player};

/// The result of a showdown.
#[derive(Debug)]
pub struct Showdown<'a> {
    winners: Vec<&'a Player>,
    value: HandValue,
}

impl<'a> Showdown<'a> {
    /// The players with the best hand in traversal order, never empty.
    pub fn winners(&self) -> &[&'a Player] {
        &self.winners
    }

    /// The value of the winning hand.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// Checks if more than one player won the pot.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Finds the players with the best hand given the community cards.
///
/// Each player hand is the player hole cards plus the community cards,
/// players are visited once in iteration order and all players whose hand
/// ties with the best hand are winners.
pub fn resolve_winners<'a, I>(players: I, community: &[Card]) -> Result<Showdown<'a>, Error>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut players = players.into_iter();
    let first = players.next().ok_or(Error::EmptyPlayerSet)?;

    let mut cards = Vec::with_capacity(first.hole_cards().len() + community.len());
    let mut eval = |player: &Player| {
        cards.clear();
        cards.extend_from_slice(player.hole_cards());
        cards.extend_from_slice(community);
        HandValue::eval(&cards)
    };

    let mut showdown = Showdown {
        winners: vec![first],
        value: eval(first)?,
    };

    for player in players {
        let value = eval(player)?;
        match value.cmp(&showdown.value) {
            Ordering::Greater => {
                showdown.winners.clear();
                showdown.winners.push(player);
                showdown.value = value;
            }
            Ordering::Equal => showdown.winners.push(player),
            Ordering::Less => {}
        }
    }

    Ok(showdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, eval::parse_cards};
    use rand::prelude::*;

    fn player(nickname: &str, cards: &str) -> Player {
        Player::with_cards(nickname, parse_cards(cards))
    }

    fn nicknames(showdown: &Showdown<'_>) -> Vec<String> {
        showdown
            .winners()
            .iter()
            .map(|p| p.nickname().to_string())
            .collect()
    }

    #[test]
    fn empty_players() {
        let board = parse_cards("AS KS QS JS TS");
        let res = resolve_winners(std::iter::empty(), &board);
        assert_eq!(res.unwrap_err(), Error::EmptyPlayerSet);
    }

    #[test]
    fn single_player_wins() {
        let alice = player("Alice", "2C 7D");
        let board = parse_cards("AS KS QS 9H 4D");
        let showdown = resolve_winners([&alice], &board).unwrap();
        assert_eq!(nicknames(&showdown), ["Alice"]);
        assert!(!showdown.is_split());
    }

    #[test]
    fn insufficient_cards() {
        let alice = player("Alice", "2C 7D");
        let board = parse_cards("AS KS");
        let res = resolve_winners([&alice], &board);
        assert_eq!(res.unwrap_err(), Error::InsufficientCards(4));
    }

    #[test]
    fn higher_category_wins() {
        let alice = player("Alice", "AH AD");
        let bob = player("Bob", "7C 8C");
        let carol = player("Carol", "KH KD");
        let board = parse_cards("9S TD JC 2H 3S");

        let showdown = resolve_winners([&alice, &bob, &carol], &board).unwrap();
        assert_eq!(nicknames(&showdown), ["Bob"]);
        assert_eq!(showdown.value().category(), crate::HandCategory::Straight);
    }

    #[test]
    fn kicker_wins() {
        let alice = player("Alice", "AH QD");
        let bob = player("Bob", "AD KC");
        let board = parse_cards("AS 9D 7C 4H 2S");

        let showdown = resolve_winners([&alice, &bob], &board).unwrap();
        assert_eq!(nicknames(&showdown), ["Bob"]);

        // Same result for any traversal order.
        let showdown = resolve_winners([&bob, &alice], &board).unwrap();
        assert_eq!(nicknames(&showdown), ["Bob"]);
    }

    #[test]
    fn split_pot_on_board_straight() {
        let alice = player("Alice", "AH 2C");
        let bob = player("Bob", "KD 3C");
        let carol = player("Carol", "QD QC");
        let board = parse_cards("9S 8D 7C 6H 5S");

        let showdown = resolve_winners([&alice, &bob, &carol], &board).unwrap();
        assert_eq!(nicknames(&showdown), ["Alice", "Bob", "Carol"]);
        assert!(showdown.is_split());
    }

    #[test]
    fn split_pot_resets_on_better_hand() {
        let alice = player("Alice", "AH 2C");
        let bob = player("Bob", "AD 3C");
        let carol = player("Carol", "TC 4D");
        let dave = player("Dave", "AC 3D");
        let board = parse_cards("9S 8D 7C 6H KS");

        // Alice and Bob tie on ace high, Carol's straight beats them, Dave ties
        // with the first two but not with Carol.
        let showdown = resolve_winners([&alice, &bob, &carol, &dave], &board).unwrap();
        assert_eq!(nicknames(&showdown), ["Carol"]);
    }

    #[test]
    fn flush_kickers_decide() {
        let alice = player("Alice", "2H 3C");
        let bob = player("Bob", "8H 3D");
        let board = parse_cards("AH JH 9H 5H KS");

        let showdown = resolve_winners([&alice, &bob], &board).unwrap();
        assert_eq!(nicknames(&showdown), ["Bob"]);
    }

    #[test]
    fn wheel_loses_to_six_high() {
        let alice = player("Alice", "AH 2C");
        let bob = player("Bob", "6D 2D");
        let board = parse_cards("3S 4D 5C KH KS");

        let showdown = resolve_winners([&alice, &bob], &board).unwrap();
        assert_eq!(nicknames(&showdown), ["Bob"]);
    }

    #[test]
    fn winners_are_never_empty() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let players = (0..6)
                .map(|idx| {
                    let cards = vec![deck.pop().unwrap(), deck.pop().unwrap()];
                    Player::with_cards(&format!("P{idx}"), cards)
                })
                .collect::<Vec<_>>();
            let board = (0..5).map(|_| deck.pop().unwrap()).collect::<Vec<_>>();

            let showdown = resolve_winners(&players, &board).unwrap();
            assert!(!showdown.winners().is_empty());

            // Every winner has the best value and no loser ties it.
            for p in &players {
                let mut cards = p.hole_cards().to_vec();
                cards.extend_from_slice(&board);
                let value = HandValue::eval(&cards).unwrap();
                let is_winner = showdown.winners().iter().any(|w| w.id() == p.id());
                assert!(value <= showdown.value());
                assert_eq!(is_winner, value == showdown.value());
            }
        }
    }
}
