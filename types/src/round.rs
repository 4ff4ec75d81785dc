//! Round outcome types shared between the engine and its hosts.

use serde::{Deserialize, Serialize};

use crate::Number;

/// How a round was resolved. A round has exactly one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
    Timeout,
}

impl Outcome {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Correct => "correct",
            Outcome::Incorrect => "incorrect",
            Outcome::Timeout => "timeout",
        }
    }
}

/// Result of the single accepted answer in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub points_awarded: u32,
    pub correct_number: Number,
}

/// Result of a round that ran out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutResult {
    pub correct_number: Number,
}

/// Either way a round can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Answered(AnswerResult),
    TimedOut(TimeoutResult),
}

impl Resolution {
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self {
            Resolution::Answered(result) if result.is_correct => Outcome::Correct,
            Resolution::Answered(_) => Outcome::Incorrect,
            Resolution::TimedOut(_) => Outcome::Timeout,
        }
    }

    #[must_use]
    pub const fn correct_number(&self) -> Number {
        match self {
            Resolution::Answered(AnswerResult { correct_number, .. })
            | Resolution::TimedOut(TimeoutResult { correct_number }) => *correct_number,
        }
    }

    #[must_use]
    pub const fn points_awarded(&self) -> u32 {
        match self {
            Resolution::Answered(result) => result.points_awarded,
            Resolution::TimedOut(_) => 0,
        }
    }
}

impl From<AnswerResult> for Resolution {
    fn from(result: AnswerResult) -> Self {
        Resolution::Answered(result)
    }
}

impl From<TimeoutResult> for Resolution {
    fn from(result: TimeoutResult) -> Self {
        Resolution::TimedOut(result)
    }
}
