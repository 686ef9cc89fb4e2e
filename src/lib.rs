//! # word-blitz
//!
//! State engine for a timed word-guessing game screen: a countdown, a
//! shuffled word queue, a score counter, and haptic-feedback signaling.
//!
//! ## Design Principles
//!
//! 1. **UI-agnostic**: The engine publishes state through a plain observer
//!    trait. No binding framework, no rendering, no platform vibrator -
//!    those are the host's job.
//!
//! 2. **Host-driven time**: There is no hidden timer thread. The host event
//!    loop reports elapsed wall time via `GameSession::advance` and the
//!    countdown turns it into ticks. All mutation stays on one logical
//!    thread, so there is nothing to lock.
//!
//! 3. **Acknowledged one-shot events**: Game-finished and buzz are events,
//!    not values. They stay pending until the host acknowledges them, which
//!    makes observer re-attachment (a UI rebuilding itself) well-defined.
//!
//! ## Modules
//!
//! - `core`: Configuration and RNG
//! - `words`: The shuffled word queue and default corpus
//! - `buzz`: Buzz kinds and their vibration patterns
//! - `clock`: The countdown state machine and time formatting
//! - `events`: The observer protocol
//! - `session`: The game session tying it all together
//!
//! ## Example
//!
//! ```
//! use word_blitz::{BuzzKind, GameSession};
//!
//! let mut session = GameSession::builder().seed(42).build().unwrap();
//! assert_eq!(session.remaining_secs(), 30);
//!
//! session.on_correct();
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.pending_buzz(), BuzzKind::Correct);
//! session.on_buzz_complete();
//!
//! // The host loop feeds elapsed time in.
//! session.advance(30_000);
//! assert!(session.is_finished());
//! session.on_game_finish_complete();
//! session.shutdown();
//! ```

pub mod buzz;
pub mod clock;
pub mod core;
pub mod events;
pub mod session;
pub mod words;

// Re-export commonly used types
pub use crate::buzz::BuzzKind;
pub use crate::clock::{format_elapsed, Countdown, CountdownStatus, TickEvent};
pub use crate::core::{ConfigError, GameConfig, GameRng};
pub use crate::events::{GameObserver, ObserverRegistry};
pub use crate::session::{GameSession, GameSessionBuilder};
pub use crate::words::{default_corpus, WordQueue, DEFAULT_CORPUS};
