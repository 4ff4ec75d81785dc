//! Round engine for Handcount - state machine and scoring.
//!
//! This crate contains the game state without any rendering. A host owns a
//! [`RoundEngine`], forwards user actions and timer ticks to it, and draws what
//! the engine asks for through [`RoundView`].
//!
//! ```text
//! Idle --start_round--> InProgress --answer | timeout--> Resolved
//!                           ^                               |
//!                           +---------- start_round --------+
//! ```
//!
//! A round resolves exactly once. Answers, timeouts and ticks that arrive after
//! resolution are ignored.

mod feedback;
mod options;
mod scoring;
mod selector;
mod timer;
mod view;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use handcount_config::FeedbackMessages;
pub use handcount_types::{
    AnswerResult, HandGroups, InvalidNumber, Number, Outcome, Resolution, TimeoutResult,
};

pub use feedback::feedback_text;
pub use options::{OPTION_COUNT, generate_options};
pub use scoring::{
    BASE_POINTS, STREAK_BONUS, Scoreboard, SessionStats, TIME_BONUS_PER_SECOND, points_for,
};
pub use selector::{MAX_REJECTIONS, RECENT_CAPACITY, RecentNumbers, next_number};
pub use timer::{
    ManualScheduler, Scheduler, TICK_PERIOD, Tick, TimerHandle, TimerId, TokioScheduler,
};
pub use view::RoundView;

/// Seconds on the clock when a round starts.
pub const ROUND_SECONDS: u32 = 15;

// ============================================================================
// RoundState - the current question
// ============================================================================

/// Where the engine is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    InProgress,
    Resolved(Outcome),
}

/// The question on screen. Replaced wholesale when the next round starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Number,
    options: [Number; OPTION_COUNT],
    time_remaining: u32,
    outcome: Option<Outcome>,
}

impl RoundState {
    fn new(target: Number, options: [Number; OPTION_COUNT]) -> Self {
        Self {
            target,
            options,
            time_remaining: ROUND_SECONDS,
            outcome: None,
        }
    }

    #[must_use]
    pub fn target(&self) -> Number {
        self.target
    }

    #[must_use]
    pub fn options(&self) -> &[Number; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Set exactly once per round, by the first answer or the timeout.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

// ============================================================================
// RoundEngine
// ============================================================================

/// Owns all game state for one session.
///
/// Single-threaded: every method runs to completion before the next event is
/// handled. The only resource held is the active round's [`TimerHandle`], which
/// is cancelled on resolution, on the next `start_round`, and on drop.
#[derive(Debug)]
pub struct RoundEngine<S: Scheduler, R: rand::Rng = StdRng> {
    scheduler: S,
    rng: R,
    recent: RecentNumbers,
    scoreboard: Scoreboard,
    stats: SessionStats,
    round: Option<RoundState>,
    timer: Option<TimerHandle>,
}

impl<S: Scheduler> RoundEngine<S> {
    /// Engine with a freshly seeded RNG.
    pub fn new(scheduler: S) -> Self {
        Self::with_rng(scheduler, StdRng::seed_from_u64(rand::random()))
    }
}

impl<S: Scheduler, R: rand::Rng> RoundEngine<S, R> {
    pub fn with_rng(scheduler: S, rng: R) -> Self {
        Self {
            scheduler,
            rng,
            recent: RecentNumbers::new(),
            scoreboard: Scoreboard::default(),
            stats: SessionStats::default(),
            round: None,
            timer: None,
        }
    }

    /// Continue from an existing score and streak.
    pub fn with_scoreboard(mut self, scoreboard: Scoreboard) -> Self {
        self.scoreboard = scoreboard;
        self
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        match &self.round {
            None => RoundPhase::Idle,
            Some(round) => match round.outcome {
                None => RoundPhase::InProgress,
                Some(outcome) => RoundPhase::Resolved(outcome),
            },
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.scoreboard.streak()
    }

    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn recent(&self) -> &RecentNumbers {
        &self.recent
    }

    /// The countdown driving the current round, if it is still running.
    #[must_use]
    pub fn timer(&self) -> Option<&TimerHandle> {
        self.timer.as_ref()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    // ------------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------------

    /// Begin a new round with a freshly selected number.
    pub fn start_round(&mut self, view: &mut dyn RoundView) -> &RoundState {
        let target = next_number(&mut self.recent, &mut self.rng);
        self.begin_round(target, view)
    }

    /// Begin a new round showing `target`. Options are still generated randomly.
    pub fn start_round_with(&mut self, target: Number, view: &mut dyn RoundView) -> &RoundState {
        self.recent.record(target);
        self.begin_round(target, view)
    }

    /// Record the player's choice.
    ///
    /// Out-of-range input is rejected. Returns `Ok(None)` when there is no round or
    /// it has already been resolved.
    pub fn submit_answer(
        &mut self,
        selected: impl Into<i64>,
    ) -> Result<Option<AnswerResult>, InvalidNumber> {
        let selected = Number::new(selected).inspect_err(|err| {
            tracing::warn!(%err, "Rejected answer");
        })?;

        let Some(round) = self.round.as_mut().filter(|round| !round.is_answered()) else {
            tracing::debug!(%selected, "Answer ignored, no round in progress");
            return Ok(None);
        };

        let is_correct = selected == round.target;
        let points_awarded = if is_correct {
            self.scoreboard.record_correct(round.time_remaining)
        } else {
            self.scoreboard.record_miss();
            0
        };
        let outcome = if is_correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        round.outcome = Some(outcome);
        let correct_number = round.target;

        self.finish_round(outcome);
        tracing::debug!(
            %selected,
            %correct_number,
            points_awarded,
            score = self.scoreboard.score(),
            streak = self.scoreboard.streak(),
            "Round answered"
        );

        Ok(Some(AnswerResult {
            is_correct,
            points_awarded,
            correct_number,
        }))
    }

    /// Resolve the round as timed out. `None` if it was already resolved.
    pub fn on_timeout(&mut self) -> Option<TimeoutResult> {
        let round = self.round.as_mut().filter(|round| !round.is_answered())?;
        round.time_remaining = 0;
        round.outcome = Some(Outcome::Timeout);
        let correct_number = round.target;

        self.scoreboard.record_miss();
        self.finish_round(Outcome::Timeout);
        tracing::debug!(%correct_number, "Round timed out");

        Some(TimeoutResult { correct_number })
    }

    /// Advance the countdown by one step.
    ///
    /// Ticks from any timer other than the current round's are dropped. Returns the
    /// timeout result when this tick runs the clock out.
    pub fn on_tick(&mut self, tick: Tick) -> Option<TimeoutResult> {
        if self.timer.as_ref().map(TimerHandle::id) != Some(tick.timer) {
            tracing::trace!(timer = tick.timer.value(), "Stale tick ignored");
            return None;
        }

        let round = self.round.as_mut().filter(|round| !round.is_answered())?;
        round.time_remaining = round.time_remaining.saturating_sub(1);
        if round.time_remaining > 0 {
            return None;
        }
        self.on_timeout()
    }

    /// Deliver `seconds` ticks from the current timer, stopping early if the round ends.
    pub fn advance(&mut self, seconds: u32) -> Option<TimeoutResult> {
        for _ in 0..seconds {
            let tick = self.timer.as_ref()?.tick();
            if let Some(result) = self.on_tick(tick) {
                return Some(result);
            }
        }
        None
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn begin_round(&mut self, target: Number, view: &mut dyn RoundView) -> &RoundState {
        self.release_timer();

        let options = generate_options(target, &mut self.rng);
        view.render_hands(&target.hand_groups());
        view.render_options(&options);
        view.reset_feedback();

        self.timer = Some(self.scheduler.start_interval(TICK_PERIOD));
        tracing::debug!(%target, ?options, "Round started");

        self.round.insert(RoundState::new(target, options))
    }

    fn finish_round(&mut self, outcome: Outcome) {
        self.release_timer();
        self.stats.record(outcome, self.scoreboard.streak());
        if self.stats.rounds % 10 == 0 {
            tracing::info!(
                rounds = self.stats.rounds,
                score = self.scoreboard.score(),
                "Session milestone"
            );
        }
    }

    fn release_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl<S: Scheduler, R: rand::Rng> Drop for RoundEngine<S, R> {
    fn drop(&mut self) {
        self.release_timer();
    }
}
