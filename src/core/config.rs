//! Session configuration.
//!
//! Hosts configure a session at startup by providing a `GameConfig`:
//! countdown length, tick interval, panic threshold, and the word corpus.
//! The engine never hardcodes these - the defaults reproduce the shipped
//! game (30 second countdown, 1 second ticks, 10 second panic window,
//! 21-word corpus) but every knob is adjustable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::words::default_corpus;

/// Total game time in milliseconds.
pub const DEFAULT_COUNTDOWN_MS: u64 = 30_000;

/// Timer tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

/// Remaining seconds at or below which every tick re-fires a panic buzz.
pub const DEFAULT_PANIC_THRESHOLD_SECS: u64 = 10;

/// Configuration faults detected when building a session.
///
/// These are caller-supplied configuration problems, not runtime errors:
/// every operation on a validated session is total.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The word corpus is empty; the queue could never produce a word.
    #[error("word corpus is empty")]
    EmptyCorpus,

    /// The tick interval is zero; the countdown could never advance.
    #[error("tick interval must be nonzero")]
    ZeroTickInterval,
}

/// Complete session configuration.
///
/// Defaults reproduce the shipped game. Builder-style setters allow
/// overriding individual knobs:
///
/// ```
/// use word_blitz::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_countdown_ms(60_000)
///     .with_corpus(vec!["alpha".into(), "beta".into()]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Total game time in milliseconds.
    pub countdown_ms: u64,

    /// Timer tick interval in milliseconds. Must be nonzero.
    pub tick_interval_ms: u64,

    /// Remaining seconds at or below which ticks fire a panic buzz.
    pub panic_threshold_secs: u64,

    /// The word corpus. Must be non-empty.
    pub corpus: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown_ms: DEFAULT_COUNTDOWN_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            panic_threshold_secs: DEFAULT_PANIC_THRESHOLD_SECS,
            corpus: default_corpus(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the shipped-game defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total countdown in milliseconds.
    #[must_use]
    pub fn with_countdown_ms(mut self, ms: u64) -> Self {
        self.countdown_ms = ms;
        self
    }

    /// Set the tick interval in milliseconds.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the panic threshold in seconds.
    #[must_use]
    pub fn with_panic_threshold_secs(mut self, secs: u64) -> Self {
        self.panic_threshold_secs = secs;
        self
    }

    /// Replace the word corpus.
    #[must_use]
    pub fn with_corpus(mut self, corpus: Vec<String>) -> Self {
        self.corpus = corpus;
        self
    }

    /// Check the configuration invariants.
    ///
    /// Called by `GameSessionBuilder::build`; exposed so hosts can validate
    /// user-supplied configuration up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.corpus.is_empty() {
            return Err(ConfigError::EmptyCorpus);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
