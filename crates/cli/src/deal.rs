// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals hands at a table.
use anyhow::Result;
use log::info;
use rand::prelude::*;

use showdown_eval::{Deck, HandValue, Player, Table};

static NICKNAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Frank", "Mike"];

/// Deal configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of players at the table.
    pub players: usize,
    /// Number of hands to deal.
    pub hands: u32,
    /// Seed for the deck shuffle.
    pub seed: Option<u64>,
}

/// Deals `hands` hands printing the players hands and the winners.
pub fn run(config: &Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let players = NICKNAMES
        .iter()
        .take(config.players)
        .map(|&nickname| Player::new(nickname))
        .collect();
    let mut table = Table::new(players)?;

    info!(
        "Dealing {} hands to {} players",
        config.hands,
        table.players().len()
    );

    for hand in 1..=config.hands {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        table.deal_hole_cards(&mut deck)?;
        table.deal_flop(&mut deck)?;
        table.deal_turn(&mut deck)?;
        table.deal_river(&mut deck)?;

        println!("Hand {hand}");
        print!("Board:");
        for card in table.board() {
            print!(" {card}");
        }
        println!();

        let mut cards = Vec::with_capacity(Table::HOLE_CARDS + Table::BOARD_CARDS);
        for player in table.rotation(table.action()) {
            cards.clear();
            cards.extend_from_slice(player.hole_cards());
            cards.extend_from_slice(table.board());

            let (value, best) = HandValue::eval_with_best_hand(&cards)?;
            let best = best.map(|c| c.to_string()).join(" ");
            println!("  {:<14} {:<16} {best}", player.to_string(), value.category());
        }

        let showdown = table.showdown()?;
        let winners = showdown
            .winners()
            .iter()
            .map(|p| p.nickname())
            .collect::<Vec<_>>();

        if showdown.is_split() {
            println!("Split pot: {} with {}\n", winners.join(", "), showdown.value());
        } else {
            println!("Winner: {} with {}\n", winners.join(", "), showdown.value());
        }

        table.next_hand();
    }

    Ok(())
}
