// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Counts hand categories for all k-cards hands.
//!
//! With 7 cards and a release build:
//!
//! ```text
//! $ showdown count --cards 7 --tasks 8
//! Total hands      133784560
//! ...
//! High Card:       23294460
//! Pair:            58627800
//! Two Pair:        31433400
//! Three of a Kind: 6461620
//! Straight:        6180020
//! Flush:           4047644
//! Full House:      3473184
//! Four of a Kind:  224848
//! Straight Flush:  41584
//! ```
use anyhow::{Result, bail, ensure};
use log::info;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use showdown_eval::{Deck, HandCategory, HandValue};

/// Evaluates all k-cards hands with `num_tasks` parallel tasks and prints the
/// number of hands for each category.
pub fn run(k: usize, num_tasks: usize) -> Result<()> {
    ensure!(
        k >= HandValue::MIN_CARDS,
        "A hand needs at least {} cards, got {k}",
        HandValue::MIN_CARDS
    );

    info!("Evaluating all {k}-cards hands with {num_tasks} tasks");

    // Per task counters to avoid contention.
    let task_counters = (0..num_tasks)
        .map(|_| {
            (0..HandCategory::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let failures = AtomicU64::new(0);
    let now = Instant::now();

    Deck::default().par_for_each(num_tasks, k, |task_id, hand| match HandValue::eval(hand) {
        Ok(value) => {
            task_counters[task_id][value.category() as usize].fetch_add(1, Ordering::Relaxed);
        }
        Err(_) => {
            failures.fetch_add(1, Ordering::Relaxed);
        }
    });

    let elapsed = now.elapsed().as_secs_f64();

    let failures = failures.into_inner();
    if failures > 0 {
        bail!("Failed to evaluate {failures} hands");
    }

    let counts = HandCategory::categories()
        .map(|category| {
            let count = task_counters
                .iter()
                .map(|counters| counters[category as usize].load(Ordering::Relaxed))
                .sum::<u64>();
            (category, count)
        })
        .collect::<Vec<_>>();

    let total = counts.iter().map(|(_, count)| count).sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (category, count) in counts {
        println!("{:<17}{count}", format!("{category}:"));
    }

    Ok(())
}
