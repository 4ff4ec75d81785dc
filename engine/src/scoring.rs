//! Score, streak and per-session tallies.

use handcount_types::Outcome;

/// Points for any correct answer.
pub const BASE_POINTS: u32 = 10;
/// Bonus per second left on the countdown.
pub const TIME_BONUS_PER_SECOND: u32 = 2;
/// Bonus per correct answer already in the streak.
pub const STREAK_BONUS: u32 = 5;

/// Points for a correct answer with `time_remaining` seconds left and `streak`
/// correct answers before this one. Saturates at `u32::MAX`.
#[must_use]
pub const fn points_for(time_remaining: u32, streak: u32) -> u32 {
    BASE_POINTS
        .saturating_add(time_remaining.saturating_mul(TIME_BONUS_PER_SECOND))
        .saturating_add(streak.saturating_mul(STREAK_BONUS))
}

/// Running score and streak. Neither ever goes negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    streak: u32,
}

impl Scoreboard {
    #[must_use]
    pub const fn new(score: u32, streak: u32) -> Self {
        Self { score, streak }
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// Award a correct answer and return the points it earned.
    pub fn record_correct(&mut self, time_remaining: u32) -> u32 {
        let points = points_for(time_remaining, self.streak);
        self.streak = self.streak.saturating_add(1);
        self.score = self.score.saturating_add(points);
        points
    }

    /// A wrong answer or a timeout: the streak ends, the score stays.
    pub fn record_miss(&mut self) {
        self.streak = 0;
    }
}

/// Tallies for the whole session, reported when the host exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub timeouts: u32,
    pub best_streak: u32,
}

impl SessionStats {
    pub(crate) fn record(&mut self, outcome: Outcome, streak: u32) {
        self.rounds += 1;
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.incorrect += 1,
            Outcome::Timeout => self.timeouts += 1,
        }
        self.best_streak = self.best_streak.max(streak);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_time_no_streak_is_forty() {
        assert_eq!(points_for(15, 0), 40);
    }

    #[test]
    fn full_time_streak_three_is_fifty_five() {
        assert_eq!(points_for(15, 3), 55);
    }

    #[test]
    fn zero_time_still_earns_base() {
        assert_eq!(points_for(0, 0), BASE_POINTS);
    }

    #[test]
    fn correct_uses_pre_increment_streak() {
        let mut board = Scoreboard::new(0, 2);
        let points = board.record_correct(10);
        assert_eq!(points, 10 + 20 + 10);
        assert_eq!(board.streak(), 3);
        assert_eq!(board.score(), 40);
    }

    #[test]
    fn consecutive_correct_answers_build_streak() {
        let mut board = Scoreboard::default();
        assert_eq!(board.record_correct(15), 40);
        assert_eq!(board.record_correct(15), 45);
        assert_eq!(board.record_correct(15), 50);
        assert_eq!(board.score(), 135);
        assert_eq!(board.streak(), 3);
    }

    #[test]
    fn huge_streak_saturates_instead_of_overflowing() {
        assert_eq!(points_for(15, u32::MAX / 2), u32::MAX);
        assert_eq!(points_for(u32::MAX, 0), u32::MAX);

        let mut board = Scoreboard::new(0, u32::MAX / 2);
        assert_eq!(board.record_correct(15), u32::MAX);
        assert_eq!(board.score(), u32::MAX);
        assert_eq!(board.streak(), u32::MAX / 2 + 1);

        let mut board = Scoreboard::new(u32::MAX, u32::MAX);
        board.record_correct(15);
        assert_eq!(board.score(), u32::MAX);
        assert_eq!(board.streak(), u32::MAX);
    }

    #[test]
    fn miss_resets_streak_and_keeps_score() {
        let mut board = Scoreboard::new(120, 4);
        board.record_miss();
        assert_eq!(board.streak(), 0);
        assert_eq!(board.score(), 120);
    }

    #[test]
    fn stats_track_outcomes_and_best_streak() {
        let mut stats = SessionStats::default();
        stats.record(Outcome::Correct, 1);
        stats.record(Outcome::Correct, 2);
        stats.record(Outcome::Timeout, 0);
        stats.record(Outcome::Incorrect, 0);
        stats.record(Outcome::Correct, 1);

        assert_eq!(
            stats,
            SessionStats {
                rounds: 5,
                correct: 3,
                incorrect: 1,
                timeouts: 1,
                best_streak: 2,
            }
        );
    }
}
