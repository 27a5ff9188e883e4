// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand};
use log::error;

use showdown_eval::Card;

mod count;
mod deal;
mod eval;

#[derive(Debug, Parser)]
#[command(about = "Poker hands evaluation and showdown.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals hands at a table and shows the winners.
    Deal {
        /// Number of players at the table.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=6))]
        players: u8,
        /// Number of hands to deal.
        #[clap(long, default_value_t = 1)]
        hands: u32,
        /// Seed for reproducible deals.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Evaluates a hand of 5 to 7 cards, for example `eval AS KD QC JH TS`.
    Eval {
        /// The hand cards.
        #[clap(required = true, num_args = 5..=7)]
        cards: Vec<Card>,
        /// Print the result as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Counts the hand categories for all the hands of a given size.
    Count {
        /// Number of cards in a hand.
        #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let res = match cli.command {
        Command::Deal {
            players,
            hands,
            seed,
        } => deal::run(&deal::Config {
            players: players as usize,
            hands,
            seed,
        }),
        Command::Eval { cards, json } => eval::run(&cards, json),
        Command::Count { cards, tasks } => count::run(cards as usize, tasks as usize),
    };

    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
}
