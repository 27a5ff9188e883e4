// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table and players types.
use log::{debug, trace};
use std::{fmt, sync::atomic};

use crate::{Card, Deck, Error, Showdown, resolve_winners};

/// A unique player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Create a new unique player id.
    pub fn new_id() -> PlayerId {
        static LAST_ID: atomic::AtomicU32 = atomic::AtomicU32::new(1);
        PlayerId(LAST_ID.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A table player.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    nickname: String,
    hole_cards: Vec<Card>,
}

impl Player {
    /// Creates a new player with no cards.
    pub fn new(nickname: impl Into<String>) -> Self {
        Self::with_cards(nickname, Vec::new())
    }

    /// Creates a new player with the given hole cards.
    pub fn with_cards(nickname: impl Into<String>, hole_cards: Vec<Card>) -> Self {
        Self {
            id: PlayerId::new_id(),
            nickname: nickname.into(),
            hole_cards,
        }
    }

    /// This player id.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// This player nickname.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// This player private cards.
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole_cards
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nickname)?;
        for card in &self.hole_cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

/// A table with seated players and the community cards.
///
/// Seats are kept in order and the action seat moves clockwise one seat per
/// hand, cards are dealt and players compared starting from the action seat.
#[derive(Debug)]
pub struct Table {
    players: Vec<Player>,
    board: Vec<Card>,
    action: usize,
}

impl Table {
    /// The maximum number of players at a table.
    pub const MAX_PLAYERS: usize = 6;

    /// The number of cards dealt to each player.
    pub const HOLE_CARDS: usize = 2;

    /// The maximum number of community cards.
    pub const BOARD_CARDS: usize = 5;

    /// Creates a table with the given players, the action starts from the last
    /// seat.
    pub fn new(players: Vec<Player>) -> Result<Self, Error> {
        if players.is_empty() {
            return Err(Error::EmptyPlayerSet);
        }

        if players.len() > Self::MAX_PLAYERS {
            return Err(Error::TooManyPlayers {
                count: players.len(),
                max: Self::MAX_PLAYERS,
            });
        }

        Ok(Self {
            action: players.len() - 1,
            players,
            board: Vec::with_capacity(Self::BOARD_CARDS),
        })
    }

    /// The players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The action seat.
    pub fn action(&self) -> usize {
        self.action
    }

    /// Returns the seats indices starting from `start` going clockwise, each
    /// seat is returned exactly once.
    pub fn seats(&self, start: usize) -> impl Iterator<Item = usize> + use<> {
        let count = self.players.len();
        (0..count).map(move |offset| (start + offset) % count)
    }

    /// Returns all players starting from the player at seat `start`, each
    /// player is returned exactly once.
    pub fn rotation(&self, start: usize) -> impl Iterator<Item = &Player> {
        self.seats(start).map(|seat| &self.players[seat])
    }

    /// Deals the hole cards to all players one card at a time, starting from
    /// the action seat.
    pub fn deal_hole_cards(&mut self, deck: &mut Deck) -> Result<(), Error> {
        for player in &mut self.players {
            player.hole_cards.clear();
        }

        for _ in 0..Self::HOLE_CARDS {
            for seat in self.seats(self.action) {
                let card = deck.pop()?;
                let player = &mut self.players[seat];
                trace!("Dealt {card} to {}", player.nickname);
                player.hole_cards.push(card);
            }
        }

        Ok(())
    }

    /// Deals the three flop cards.
    pub fn deal_flop(&mut self, deck: &mut Deck) -> Result<(), Error> {
        self.deal_community(deck, 3)
    }

    /// Deals the turn card.
    pub fn deal_turn(&mut self, deck: &mut Deck) -> Result<(), Error> {
        self.deal_community(deck, 1)
    }

    /// Deals the river card.
    pub fn deal_river(&mut self, deck: &mut Deck) -> Result<(), Error> {
        self.deal_community(deck, 1)
    }

    /// Deals `count` community cards, the board is unchanged on error.
    pub fn deal_community(&mut self, deck: &mut Deck, count: usize) -> Result<(), Error> {
        if self.board.len() + count > Self::BOARD_CARDS {
            return Err(Error::BoardFull {
                board: self.board.len(),
                count,
            });
        }

        let cards = (0..count)
            .map(|_| deck.pop())
            .collect::<Result<Vec<_>, _>>()?;
        self.board.extend(cards);

        debug!("Board {}", CardsDisplay(&self.board));
        Ok(())
    }

    /// Finds the winners comparing players from the action seat.
    pub fn showdown(&self) -> Result<Showdown<'_>, Error> {
        let showdown = resolve_winners(self.rotation(self.action), &self.board)?;

        debug!(
            "Showdown {} won by {}",
            showdown.value(),
            showdown
                .winners()
                .iter()
                .map(|p| p.nickname())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(showdown)
    }

    /// Clears all cards and moves the action to the next seat.
    pub fn next_hand(&mut self) {
        self.board.clear();
        for player in &mut self.players {
            player.hole_cards.clear();
        }

        self.action = (self.action + 1) % self.players.len();
    }
}

/// Space separated cards.
struct CardsDisplay<'a>(&'a [Card]);

impl fmt::Display for CardsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::prelude::*;
    use showdown_cards::Error as CardsError;

    fn new_table(count: usize) -> Table {
        let players = (0..count)
            .map(|idx| Player::new(format!("P{idx}")))
            .collect::<Vec<_>>();
        Table::new(players).unwrap()
    }

    #[test]
    fn table_seats_limits() {
        assert_eq!(Table::new(vec![]).unwrap_err(), Error::EmptyPlayerSet);

        let players = (0..7).map(|_| Player::new("P")).collect::<Vec<_>>();
        assert_eq!(
            Table::new(players).unwrap_err(),
            Error::TooManyPlayers { count: 7, max: 6 }
        );

        let table = new_table(6);
        assert_eq!(table.players().len(), 6);
        assert_eq!(table.action(), 5);
        assert!(table.board().is_empty());
    }

    #[test]
    fn unique_player_ids() {
        let ids = (0..100)
            .map(|_| Player::new("P").id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn rotation_visits_each_player_once() {
        for count in 1..=Table::MAX_PLAYERS {
            let table = new_table(count);

            for start in 0..count * 2 {
                let ids = table.rotation(start).map(|p| p.id()).collect::<Vec<_>>();
                assert_eq!(ids.len(), count);
                assert_eq!(ids.iter().collect::<HashSet<_>>().len(), count);

                let first = &table.players()[start % count];
                assert_eq!(ids[0], first.id());
            }
        }
    }

    #[test]
    fn deal_a_hand() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
        let mut table = new_table(4);

        table.deal_hole_cards(&mut deck).unwrap();
        table.deal_flop(&mut deck).unwrap();
        assert_eq!(table.board().len(), 3);
        table.deal_turn(&mut deck).unwrap();
        table.deal_river(&mut deck).unwrap();
        assert_eq!(table.board().len(), Table::BOARD_CARDS);

        let mut cards = HashSet::default();
        for p in table.players() {
            assert_eq!(p.hole_cards().len(), Table::HOLE_CARDS);
            cards.extend(p.hole_cards().iter().copied());
        }
        cards.extend(table.board().iter().copied());

        assert_eq!(cards.len(), 4 * 2 + 5);
        assert_eq!(deck.count(), Deck::SIZE - 13);

        assert_eq!(
            table.deal_river(&mut deck).unwrap_err(),
            Error::BoardFull { board: 5, count: 1 }
        );
        assert_eq!(table.board().len(), Table::BOARD_CARDS);

        let showdown = table.showdown().unwrap();
        assert!(!showdown.winners().is_empty());
    }

    #[test]
    fn deal_from_empty_deck() {
        let mut deck = Deck::default();
        while deck.count() > 2 {
            deck.pop().unwrap();
        }

        let mut table = new_table(2);
        assert_eq!(
            table.deal_hole_cards(&mut deck).unwrap_err(),
            Error::Cards(CardsError::EmptyDeck)
        );

        let mut deck = Deck::default();
        while deck.count() > 2 {
            deck.pop().unwrap();
        }

        assert_eq!(
            table.deal_flop(&mut deck).unwrap_err(),
            Error::Cards(CardsError::EmptyDeck)
        );
        assert!(table.board().is_empty());
    }

    #[test]
    fn next_hand_moves_action() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut table = new_table(3);
        table.deal_hole_cards(&mut deck).unwrap();
        table.deal_flop(&mut deck).unwrap();

        let actions = (0..4)
            .map(|_| {
                table.next_hand();
                table.action()
            })
            .collect::<Vec<_>>();
        assert_eq!(actions, [0, 1, 2, 0]);

        assert!(table.board().is_empty());
        assert!(table.players().iter().all(|p| p.hole_cards().is_empty()));
    }

    #[test]
    fn showdown_from_action_seat() {
        let board = "9S 8D 7C 6H 5S"
            .split(' ')
            .map(|c| c.parse().unwrap())
            .collect::<Vec<Card>>();

        let mut table = new_table(3);
        table.board = board;
        for (p, suit) in table.players.iter_mut().zip(["C", "D", "H"]) {
            p.hole_cards = vec![
                format!("2{suit}").parse().unwrap(),
                format!("3{suit}").parse().unwrap(),
            ];
        }

        // All players split, winners are listed from the action seat.
        let showdown = table.showdown().unwrap();
        let seats = showdown
            .winners()
            .iter()
            .map(|w| w.nickname())
            .collect::<Vec<_>>();
        assert_eq!(seats, ["P2", "P0", "P1"]);
    }

    #[test]
    fn player_display() {
        let p = Player::with_cards("Alice", vec!["AS".parse().unwrap(), "KD".parse().unwrap()]);
        assert_eq!(p.to_string(), "Alice AS KD");
    }
}
