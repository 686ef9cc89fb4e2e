//! Core types: configuration and RNG.
//!
//! This module contains the building blocks the session is assembled from.
//! Hosts configure the engine via `GameConfig` rather than modifying it.

pub mod config;
pub mod rng;

pub use config::{
    ConfigError, GameConfig, DEFAULT_COUNTDOWN_MS, DEFAULT_PANIC_THRESHOLD_SECS,
    DEFAULT_TICK_INTERVAL_MS,
};
pub use rng::GameRng;
