//! Buzz signals: haptic feedback requests.
//!
//! The session asks the host to vibrate the device by setting a pending
//! `BuzzKind`. Each kind carries a fixed vibration pattern: alternating
//! off/on durations in milliseconds, in the platform vibrator convention.
//!
//! Buzzes are one-shot events. The host observes a pending buzz, plays its
//! pattern, then acknowledges via `GameSession::on_buzz_complete`, which
//! resets the pending value to `NoBuzz`. Without the acknowledgement the
//! same buzz would be re-delivered to a re-attaching observer.

use serde::{Deserialize, Serialize};

/// Three short pulses.
pub const CORRECT_BUZZ_PATTERN: [u64; 6] = [100, 100, 100, 100, 100, 100];

/// One long pulse.
pub const GAME_OVER_BUZZ_PATTERN: [u64; 2] = [0, 2000];

/// One short pulse, re-fired every tick inside the panic window.
pub const PANIC_BUZZ_PATTERN: [u64; 2] = [0, 200];

/// Silence.
pub const NO_BUZZ_PATTERN: [u64; 1] = [0];

/// The kinds of buzzing in the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuzzKind {
    /// A correct guess.
    Correct,
    /// The countdown expired.
    GameOver,
    /// A tick inside the panic window.
    CountdownPanic,
    /// Nothing pending; the acknowledged/idle value.
    #[default]
    NoBuzz,
}

impl BuzzKind {
    /// The vibration pattern: alternating off/on durations in milliseconds.
    #[must_use]
    pub const fn pattern(self) -> &'static [u64] {
        match self {
            Self::Correct => &CORRECT_BUZZ_PATTERN,
            Self::GameOver => &GAME_OVER_BUZZ_PATTERN,
            Self::CountdownPanic => &PANIC_BUZZ_PATTERN,
            Self::NoBuzz => &NO_BUZZ_PATTERN,
        }
    }

    /// True for `NoBuzz`.
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::NoBuzz)
    }
}

impl std::fmt::Display for BuzzKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::GameOver => "game-over",
            Self::CountdownPanic => "countdown-panic",
            Self::NoBuzz => "no-buzz",
        };
        write!(f, "{name}")
    }
}
