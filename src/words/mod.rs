//! Word queue: the shuffled list of words to guess.
//!
//! The queue is consumed from the front. When it runs out it refills with the
//! full corpus in a newly randomized order, so a long session simply cycles
//! the corpus; repeats across refills are expected. Within a single shuffle
//! no word repeats.
//!
//! Exhaustion is not an error. With a validated non-empty corpus, drawing
//! always succeeds.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::GameRng;

/// The shipped game's fixed 21-word corpus.
pub const DEFAULT_CORPUS: [&str; 21] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

/// The default corpus as owned strings, for `GameConfig`.
#[must_use]
pub fn default_corpus() -> Vec<String> {
    DEFAULT_CORPUS.iter().map(|w| (*w).to_string()).collect()
}

/// A front-consumed queue of words backed by a fixed corpus.
///
/// Invariant: the queue is never drawn from while empty without first
/// refilling, and the corpus is non-empty (enforced by config validation
/// before construction).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordQueue {
    corpus: Vec<String>,
    queue: VecDeque<String>,
    refill_count: u64,
}

impl WordQueue {
    /// Create a queue over `corpus`, shuffled into an initial order.
    ///
    /// The corpus must be non-empty; `GameConfig::validate` guarantees this
    /// for queues built through the session builder.
    #[must_use]
    pub fn new(corpus: Vec<String>, rng: &mut GameRng) -> Self {
        debug_assert!(!corpus.is_empty(), "corpus must be non-empty");
        let mut queue = Self {
            corpus,
            queue: VecDeque::new(),
            refill_count: 0,
        };
        queue.refill(rng);
        // The initial fill is not a mid-session reshuffle.
        queue.refill_count = 0;
        queue
    }

    /// Remove and return the front word, refilling first if exhausted.
    pub fn draw(&mut self, rng: &mut GameRng) -> String {
        if self.queue.is_empty() {
            self.refill(rng);
        }
        // Non-empty after refill because the corpus is non-empty.
        self.queue.pop_front().unwrap_or_default()
    }

    /// Words left before the next refill.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// How many mid-session refills have happened.
    #[must_use]
    pub const fn refill_count(&self) -> u64 {
        self.refill_count
    }

    /// The backing corpus.
    #[must_use]
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    fn refill(&mut self, rng: &mut GameRng) {
        let mut words = self.corpus.clone();
        rng.shuffle(&mut words);
        self.queue = words.into();
        self.refill_count += 1;
        log::debug!(
            "word queue refilled: {} words, refill #{}",
            self.queue.len(),
            self.refill_count
        );
    }
}
