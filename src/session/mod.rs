//! Game session: the state controller behind the game screen.
//!
//! A `GameSession` owns everything one round of the game needs: the shuffled
//! word queue, the current word, the score, the countdown, the pending
//! one-shot events, and the subscribed observers. The host UI renders what
//! the observers report, calls `on_skip`/`on_correct` on button presses,
//! drives time forward with `advance`, acknowledges one-shot events, and
//! calls `shutdown` when the screen goes away.
//!
//! Everything runs on the host's single logical thread; every call returns
//! immediately after mutating in-memory state and notifying observers.

use crate::buzz::BuzzKind;
use crate::clock::{format_elapsed, Countdown, TickEvent};
use crate::core::{ConfigError, GameConfig, GameRng};
use crate::events::{GameObserver, ObserverRegistry};
use crate::words::WordQueue;

const MS_PER_SECOND: u64 = 1_000;

/// Builder for creating a `GameSession`.
///
/// ```
/// use word_blitz::session::GameSessionBuilder;
///
/// let session = GameSessionBuilder::new().seed(42).build().unwrap();
/// assert_eq!(session.score(), 0);
/// assert_eq!(session.remaining_secs(), 30);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameSessionBuilder {
    config: GameConfig,
    seed: Option<u64>,
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration instead of the shipped-game defaults.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the RNG explicitly. Without this the seed comes from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and start a session.
    ///
    /// The word queue is shuffled, the first word becomes current, the score
    /// is zero, and the countdown is running.
    pub fn build(self) -> Result<GameSession, ConfigError> {
        self.config.validate()?;

        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut words = WordQueue::new(self.config.corpus.clone(), &mut rng);
        let current_word = words.draw(&mut rng);
        let countdown = Countdown::new(self.config.countdown_ms, self.config.tick_interval_ms);
        let remaining_secs = self.config.countdown_ms / MS_PER_SECOND;

        log::debug!(
            "session started: {}s countdown, {} word corpus, seed {}",
            remaining_secs,
            words.corpus().len(),
            rng.seed()
        );

        Ok(GameSession {
            config: self.config,
            rng,
            words,
            current_word,
            score: 0,
            remaining_secs,
            countdown,
            pending_buzz: BuzzKind::NoBuzz,
            finished: false,
            observers: ObserverRegistry::new(),
        })
    }
}

/// One round of the word-guessing game.
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    words: WordQueue,
    current_word: String,
    score: i64,
    remaining_secs: u64,
    countdown: Countdown,
    pending_buzz: BuzzKind,
    finished: bool,
    observers: ObserverRegistry,
}

impl GameSession {
    /// Start building a session.
    #[must_use]
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// Subscribe an observer.
    ///
    /// The current observable values (time, word, score) are replayed to the
    /// new observer immediately, and any still-unacknowledged one-shot event
    /// is re-delivered - this is what a UI re-attaching after a rotation
    /// sees, and why the acknowledgement calls exist.
    pub fn subscribe(&mut self, mut observer: Box<dyn GameObserver>) {
        observer.time_changed(self.remaining_secs, &format_elapsed(self.remaining_secs));
        observer.word_changed(&self.current_word);
        observer.score_changed(self.score);
        if !self.pending_buzz.is_silent() {
            observer.buzz(self.pending_buzz);
        }
        if self.finished {
            observer.game_finished();
        }
        self.observers.subscribe(observer);
    }

    /// Report elapsed wall time, firing any due ticks.
    ///
    /// Each tick updates the remaining time and, inside the panic window,
    /// re-fires a panic buzz. Expiry zeroes the time, raises the finished
    /// flag, fires the game-over buzz, and accepts no further ticks.
    pub fn advance(&mut self, delta_ms: u64) {
        for event in self.countdown.advance(delta_ms) {
            match event {
                TickEvent::Tick { ms_until_finished } => self.handle_tick(ms_until_finished),
                TickEvent::Finished => self.handle_finish(),
            }
        }
    }

    /// The player skipped the current word: score -1, next word. No buzz.
    pub fn on_skip(&mut self) {
        self.score -= 1;
        self.observers.notify_score(self.score);
        self.next_word();
    }

    /// The player guessed correctly: score +1, correct buzz, next word.
    pub fn on_correct(&mut self) {
        self.score += 1;
        self.observers.notify_score(self.score);
        self.set_buzz(BuzzKind::Correct);
        self.next_word();
    }

    /// Acknowledge the game-finished event, resetting the flag so it is not
    /// re-delivered to a re-attaching observer.
    pub fn on_game_finish_complete(&mut self) {
        self.finished = false;
    }

    /// Acknowledge the pending buzz, resetting it to `NoBuzz`.
    pub fn on_buzz_complete(&mut self) {
        self.pending_buzz = BuzzKind::NoBuzz;
    }

    /// Cancel the countdown. Idempotent; safe after expiry. No further
    /// ticks fire.
    pub fn shutdown(&mut self) {
        self.countdown.cancel();
        log::debug!("session shut down with score {}", self.score);
    }

    /// The current score. Unbounded; may be negative.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Remaining whole seconds.
    #[must_use]
    pub const fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Remaining time as "MM:SS".
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_elapsed(self.remaining_secs)
    }

    /// The word currently being guessed.
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// The unacknowledged buzz, or `NoBuzz`.
    #[must_use]
    pub const fn pending_buzz(&self) -> BuzzKind {
        self.pending_buzz
    }

    /// The unacknowledged finished flag.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// True while the countdown can still tick.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// The session's configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The word queue, for inspecting refill boundaries.
    #[must_use]
    pub const fn word_queue(&self) -> &WordQueue {
        &self.words
    }

    fn handle_tick(&mut self, ms_until_finished: u64) {
        self.remaining_secs = ms_until_finished / MS_PER_SECOND;
        log::trace!("tick: {}s remaining", self.remaining_secs);
        self.observers
            .notify_time(self.remaining_secs, &format_elapsed(self.remaining_secs));
        if self.remaining_secs <= self.config.panic_threshold_secs {
            self.set_buzz(BuzzKind::CountdownPanic);
        }
    }

    fn handle_finish(&mut self) {
        self.remaining_secs = 0;
        self.observers.notify_time(0, &format_elapsed(0));
        self.finished = true;
        self.observers.notify_game_finished();
        self.set_buzz(BuzzKind::GameOver);
        log::debug!("game finished with score {}", self.score);
    }

    fn set_buzz(&mut self, kind: BuzzKind) {
        self.pending_buzz = kind;
        self.observers.notify_buzz(kind);
    }

    fn next_word(&mut self) {
        self.current_word = self.words.draw(&mut self.rng);
        self.observers.notify_word(&self.current_word);
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("current_word", &self.current_word)
            .field("score", &self.score)
            .field("remaining_secs", &self.remaining_secs)
            .field("pending_buzz", &self.pending_buzz)
            .field("finished", &self.finished)
            .field("countdown", &self.countdown.status())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::builder().seed(42).build().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_secs(), 30);
        assert_eq!(session.formatted_time(), "00:30");
        assert_eq!(session.pending_buzz(), BuzzKind::NoBuzz);
        assert!(!session.is_finished());
        assert!(session.is_running());
        assert!(session
            .word_queue()
            .corpus()
            .contains(&session.current_word().to_string()));
    }

    #[test]
    fn test_empty_corpus_fails_build() {
        let result = GameSession::builder()
            .config(GameConfig::new().with_corpus(Vec::new()))
            .build();
        assert_eq!(result.unwrap_err(), ConfigError::EmptyCorpus);
    }

    #[test]
    fn test_correct_scores_and_buzzes() {
        let mut session = session();
        let before = session.current_word().to_string();

        session.on_correct();
        assert_eq!(session.score(), 1);
        assert_eq!(session.pending_buzz(), BuzzKind::Correct);
        assert_ne!(session.current_word(), before);
    }

    #[test]
    fn test_skip_scores_without_buzz() {
        let mut session = session();
        session.on_skip();
        assert_eq!(session.score(), -1);
        assert_eq!(session.pending_buzz(), BuzzKind::NoBuzz);
    }

    #[test]
    fn test_score_is_correct_minus_skips() {
        let mut session = session();
        for _ in 0..5 {
            session.on_correct();
        }
        for _ in 0..3 {
            session.on_skip();
        }
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_panic_window() {
        let mut session = session();
        // 21 seconds in: 9000 ms remain.
        session.advance(21_000);
        assert_eq!(session.remaining_secs(), 9);
        assert_eq!(session.pending_buzz(), BuzzKind::CountdownPanic);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_panic_refires_each_tick() {
        let mut session = session();
        session.advance(20_000);
        assert_eq!(session.pending_buzz(), BuzzKind::CountdownPanic);

        session.on_buzz_complete();
        assert_eq!(session.pending_buzz(), BuzzKind::NoBuzz);

        session.advance(1_000);
        assert_eq!(session.pending_buzz(), BuzzKind::CountdownPanic);
    }

    #[test]
    fn test_no_panic_before_window() {
        let mut session = session();
        session.advance(19_000);
        assert_eq!(session.remaining_secs(), 11);
        assert_eq!(session.pending_buzz(), BuzzKind::NoBuzz);
    }

    #[test]
    fn test_expiry() {
        let mut session = session();
        session.advance(30_000);
        assert_eq!(session.remaining_secs(), 0);
        assert!(session.is_finished());
        assert_eq!(session.pending_buzz(), BuzzKind::GameOver);
        assert!(!session.is_running());

        // No further ticks accepted.
        session.advance(10_000);
        assert_eq!(session.remaining_secs(), 0);
    }

    #[test]
    fn test_one_shot_acknowledgement() {
        let mut session = session();
        session.advance(30_000);

        session.on_game_finish_complete();
        assert!(!session.is_finished());

        session.on_buzz_complete();
        assert_eq!(session.pending_buzz(), BuzzKind::NoBuzz);

        // Nothing re-raises the flag after acknowledgement.
        session.advance(5_000);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_shutdown_stops_ticks() {
        let mut session = session();
        session.shutdown();
        session.advance(60_000);
        assert_eq!(session.remaining_secs(), 30);
        assert!(!session.is_finished());

        // Idempotent, including after expiry.
        session.shutdown();
    }

    #[test]
    fn test_buttons_still_work_after_expiry() {
        let mut session = session();
        session.advance(30_000);
        session.on_correct();
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_queue_refills_on_22nd_draw() {
        let mut session = session();
        // The builder drew word 1 of 21; 20 more exhaust the shuffle.
        for _ in 0..20 {
            session.on_correct();
        }
        assert_eq!(session.word_queue().refill_count(), 0);

        session.on_correct();
        assert_eq!(session.word_queue().refill_count(), 1);
        assert_eq!(session.score(), 21);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new()
            .with_countdown_ms(5_000)
            .with_panic_threshold_secs(2)
            .with_corpus(vec!["alpha".into(), "beta".into()]);
        let mut session = GameSession::builder().config(config).seed(7).build().unwrap();

        assert_eq!(session.remaining_secs(), 5);
        session.advance(3_000);
        assert_eq!(session.remaining_secs(), 2);
        assert_eq!(session.pending_buzz(), BuzzKind::CountdownPanic);

        session.advance(2_000);
        assert!(session.is_finished());
    }
}
