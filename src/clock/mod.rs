//! Countdown: the game timer as an explicit state machine.
//!
//! Instead of scheduling callbacks on a platform timer, the countdown is a
//! host-driven state machine. The host event loop reports elapsed wall time
//! via `Countdown::advance`, and the countdown converts it into zero or more
//! `TickEvent`s: one `Tick` per interval boundary crossed, carrying the
//! milliseconds still remaining at that boundary, and a single terminal
//! `Finished` at expiry.
//!
//! `Finished` and `Cancelled` are terminal: once reached, `advance` emits
//! nothing more. This is the only cancellation semantic the engine needs -
//! tear a session down and no further ticks fire.
//!
//! All mutation stays on the host's single logical thread; there is nothing
//! to lock.

use serde::{Deserialize, Serialize};

/// Where the countdown is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownStatus {
    /// Ticking; `advance` may emit events.
    #[default]
    Running,
    /// Expired; `Finished` was emitted exactly once. Terminal.
    Finished,
    /// Cancelled before expiry. Terminal, emits nothing.
    Cancelled,
}

/// An event produced by `Countdown::advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// An interval boundary was crossed.
    Tick {
        /// Milliseconds remaining at this boundary. Never zero: the boundary
        /// at zero is reported as `Finished` instead.
        ms_until_finished: u64,
    },
    /// The countdown expired. Emitted exactly once, after any final ticks.
    Finished,
}

/// A repeating countdown over a fixed total duration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Countdown {
    total_ms: u64,
    interval_ms: u64,
    elapsed_ms: u64,
    ticks_emitted: u64,
    status: CountdownStatus,
}

impl Countdown {
    /// Create a running countdown. `interval_ms` must be nonzero
    /// (`GameConfig::validate` enforces this for session-built countdowns).
    #[must_use]
    pub fn new(total_ms: u64, interval_ms: u64) -> Self {
        debug_assert!(interval_ms > 0, "tick interval must be nonzero");
        Self {
            total_ms,
            interval_ms,
            elapsed_ms: 0,
            ticks_emitted: 0,
            status: CountdownStatus::Running,
        }
    }

    /// Report `delta_ms` of elapsed wall time.
    ///
    /// Returns the events that occurred in that span, in order: a `Tick` for
    /// each interval boundary crossed, then `Finished` if the total elapsed.
    /// A large delta (e.g. after the host was suspended) yields every missed
    /// tick. Returns nothing once the countdown is terminal.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<TickEvent> {
        if self.status != CountdownStatus::Running {
            return Vec::new();
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms).min(self.total_ms);
        let mut events = Vec::new();

        loop {
            let next_boundary = (self.ticks_emitted + 1) * self.interval_ms;
            if next_boundary >= self.total_ms || next_boundary > self.elapsed_ms {
                break;
            }
            self.ticks_emitted += 1;
            events.push(TickEvent::Tick {
                ms_until_finished: self.total_ms - next_boundary,
            });
        }

        if self.elapsed_ms >= self.total_ms {
            self.status = CountdownStatus::Finished;
            events.push(TickEvent::Finished);
        }

        events
    }

    /// Cancel the countdown. Idempotent; safe after expiry.
    pub fn cancel(&mut self) {
        if self.status == CountdownStatus::Running {
            self.status = CountdownStatus::Cancelled;
        }
    }

    /// Current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> CountdownStatus {
        self.status
    }

    /// True while ticks can still fire.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == CountdownStatus::Running
    }

    /// Milliseconds left until expiry.
    #[must_use]
    pub const fn remaining_ms(&self) -> u64 {
        self.total_ms - self.elapsed_ms
    }
}

/// Format whole seconds as elapsed time: "MM:SS", or "H:MM:SS" once hours
/// are reached.
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
