// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use rand::prelude::*;
use std::thread;

use super::{Card, Deck};

/// The largest hand size.
const MAX_K: usize = 7;

/// Pascal triangle with `BINOMIALS[n][k]` = n choose k for n <= 52, k <= 7.
const BINOMIALS: [[u32; MAX_K + 1]; Deck::SIZE + 1] = {
    let mut t = [[0u32; MAX_K + 1]; Deck::SIZE + 1];
    let mut n = 0;

    while n <= Deck::SIZE {
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && n > 0 {
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
};

/// Returns the binomial coefficient for n choose k.
#[inline]
fn binomial(n: usize, k: usize) -> usize {
    assert!(n <= Deck::SIZE, "n={n} must be 0 <= n <= 52");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= 7");
    BINOMIALS[n][k] as usize
}

/// Returns the nth k-subset in colexicographic order using the combinatorial
/// number system (see Theorem L pg. 260 Knuth 4a).
fn nth_ksubset(mut nth: usize, k: usize) -> [usize; MAX_K] {
    assert!(k <= MAX_K);

    let mut out = [0; MAX_K];
    for pos in (0..k).rev() {
        // Largest c such that binomial(c, pos + 1) <= nth.
        let mut c = pos;
        while binomial(c + 1, pos + 1) <= nth {
            c += 1;
        }

        out[pos] = c;
        nth -= binomial(c, pos + 1);
    }

    out
}

/// Calls `f` for `count` k-subsets of 0..n starting from the nth k-subset.
fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    // Algorithm T from TAOCP 4a without the sentinel shortcut, c[k] = n and
    // c[k + 1] = 0 are the sentinels.
    let mut c = vec![0usize; k + 2];
    c[..k].copy_from_slice(&nth_ksubset(nth, k)[..k]);
    c[k] = n;

    for _ in 0..count {
        f(&c[..k]);

        let mut j = 0;
        while j < k && c[j] + 1 == c[j + 1] {
            c[j] = j;
            j += 1;
        }

        if j == k {
            break;
        }

        c[j] += 1;
    }
}

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of cards of length k.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=MAX_K).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        if k > n {
            return;
        }

        let num_hands = binomial(n, k);
        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                if start >= num_hands {
                    break;
                }

                let count = hands_per_task.min(num_hands - start);
                let f = &f;
                s.spawn(move || {
                    let mut hand = Vec::with_capacity(k);
                    for_each_ksubset(n, k, start, count, |positions| {
                        hand.clear();
                        hand.extend(positions.iter().map(|&pos| self.cards[pos]));
                        f(task_id, &hand);
                    });
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=MAX_K).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut hand = Vec::with_capacity(k);
                    let mut rng = SmallRng::from_os_rng();

                    for _ in 0..samples_per_task {
                        hand.clear();
                        hand.extend(self.cards.choose_multiple(&mut rng, k));
                        f(task_id, &hand);
                    }
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use std::sync::{Mutex, atomic};

    #[test]
    fn test_binomial() {
        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(52, k), v));

        [1, 23, 253, 1771, 8855, 33649, 100947, 245157]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(23, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(5, k), v));

        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(0, 3), 0);
        assert_eq!(binomial(2, 3), 0);
    }

    #[test]
    fn test_nth_ksubset() {
        let mut counter = 0;
        let count = binomial(12, 5);
        for_each_ksubset(12, 5, 0, count, |s| {
            let ks = nth_ksubset(counter, 5);
            assert_eq!(s, &ks[..5]);
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            counter += 1;
        });
        assert_eq!(count, counter);

        // Start from half way.
        counter = 0;
        let nth = count / 2;
        for_each_ksubset(12, 5, nth, count, |s| {
            let ks = nth_ksubset(nth + counter, 5);
            assert_eq!(s, &ks[..5]);
            counter += 1;
        });
        assert_eq!(count - nth, counter);
    }

    #[test]
    fn par_for_each_all_hands() {
        let hands = Mutex::new(HashSet::default());
        Deck::default().par_for_each(3, 3, |task_id, hand| {
            assert!(task_id < 3);
            assert_eq!(hand.len(), 3);
            hands.lock().unwrap().insert(hand.to_owned());
        });
        assert_eq!(hands.into_inner().unwrap().len(), 22_100);
    }

    #[test]
    fn par_for_each_more_tasks_than_hands() {
        let mut deck = Deck::default();
        while deck.count() > 3 {
            deck.pop().unwrap();
        }

        let counter = atomic::AtomicU64::new(0);
        deck.par_for_each(8, 2, |_, hand| {
            assert_eq!(hand.len(), 2);
            counter.fetch_add(1, atomic::Ordering::Relaxed);
        });
        assert_eq!(counter.load(atomic::Ordering::Relaxed), 3);
    }

    #[test]
    fn par_sample_counts() {
        let counter = atomic::AtomicU64::new(0);
        Deck::default().par_sample(4, 10, 7, |_, hand| {
            assert_eq!(hand.len(), 7);
            counter.fetch_add(1, atomic::Ordering::Relaxed);
        });
        assert_eq!(counter.load(atomic::Ordering::Relaxed), 40);
    }
}
