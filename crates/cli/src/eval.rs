// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluates a single hand.
use anyhow::Result;
use serde::Serialize;

use showdown_eval::{Card, HandValue};

#[derive(Serialize)]
struct Evaluation {
    value: HandValue,
    best: [Card; 5],
}

/// Evaluates and prints a hand.
pub fn run(cards: &[Card], json: bool) -> Result<()> {
    let (value, best) = HandValue::eval_with_best_hand(cards)?;

    if json {
        println!("{}", serde_json::to_string(&Evaluation { value, best })?);
    } else {
        let best = best.map(|c| c.to_string()).join(" ");
        println!("{value}: {best}");
    }

    Ok(())
}
