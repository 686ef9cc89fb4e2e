//! Observation protocol between the session and its UI layer.
//!
//! The session publishes state changes through `GameObserver` hooks instead
//! of exposing framework-specific observable fields. Hosts implement the
//! hooks they care about; every hook has a no-op default.
//!
//! ## One-shot events
//!
//! `game_finished` and `buzz` are one-shot events with an acknowledgement
//! protocol: after handling one, the host must call the matching
//! `GameSession::on_game_finish_complete` / `on_buzz_complete`. Until it
//! does, the event is still pending and is re-delivered to any observer
//! that subscribes - exactly the re-attachment case (a UI rebuilding after
//! a rotation) the protocol exists for.

use crate::buzz::BuzzKind;

/// Hooks invoked by the session as state changes.
///
/// All hooks run synchronously on the caller's thread, inside the mutating
/// call (`advance`, `on_skip`, ...). Keep them cheap; do rendering work on
/// the host side.
pub trait GameObserver {
    /// Remaining time changed. `formatted` is the "MM:SS" rendering.
    fn time_changed(&mut self, seconds: u64, formatted: &str) {
        let _ = (seconds, formatted);
    }

    /// The current word changed.
    fn word_changed(&mut self, word: &str) {
        let _ = word;
    }

    /// The score changed.
    fn score_changed(&mut self, score: i64) {
        let _ = score;
    }

    /// A buzz is pending. One-shot; acknowledge with
    /// `GameSession::on_buzz_complete` after vibrating.
    fn buzz(&mut self, kind: BuzzKind) {
        let _ = kind;
    }

    /// The game finished. One-shot; acknowledge with
    /// `GameSession::on_game_finish_complete` after handling.
    fn game_finished(&mut self) {}
}

/// Owns the subscribed observers and fans notifications out to them.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn GameObserver>>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer. Returns its index for debugging; observers cannot
    /// be removed individually, they live as long as the session.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) -> usize {
        self.observers.push(observer);
        self.observers.len() - 1
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn notify_time(&mut self, seconds: u64, formatted: &str) {
        for observer in &mut self.observers {
            observer.time_changed(seconds, formatted);
        }
    }

    pub(crate) fn notify_word(&mut self, word: &str) {
        for observer in &mut self.observers {
            observer.word_changed(word);
        }
    }

    pub(crate) fn notify_score(&mut self, score: i64) {
        for observer in &mut self.observers {
            observer.score_changed(score);
        }
    }

    pub(crate) fn notify_buzz(&mut self, kind: BuzzKind) {
        for observer in &mut self.observers {
            observer.buzz(kind);
        }
    }

    pub(crate) fn notify_game_finished(&mut self) {
        for observer in &mut self.observers {
            observer.game_finished();
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
