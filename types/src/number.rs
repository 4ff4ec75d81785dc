use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::HandGroups;

/// A count the game can show: guaranteed to lie in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Number(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("number must be between {min} and {max} (got {value})", min = Number::MIN, max = Number::MAX)]
pub struct InvalidNumber {
    pub value: i64,
}

impl Number {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Count of distinct values a `Number` can take.
    pub const SPAN: usize = (Self::MAX - Self::MIN + 1) as usize;

    /// Every valid number in ascending order.
    pub const ALL: [Number; Self::SPAN] = [
        Number(1),
        Number(2),
        Number(3),
        Number(4),
        Number(5),
        Number(6),
        Number(7),
        Number(8),
        Number(9),
        Number(10),
    ];

    /// Validate an externally supplied value. Out-of-range input is rejected, never clamped.
    pub fn new(value: impl Into<i64>) -> Result<Self, InvalidNumber> {
        let value = value.into();
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidNumber { value })
        }
    }

    pub fn all() -> impl Iterator<Item = Number> {
        Self::ALL.into_iter()
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// How the count is drawn as hands of up to five fingers.
    #[must_use]
    pub fn hand_groups(self) -> HandGroups {
        HandGroups::for_count(self.0)
    }
}

impl TryFrom<u8> for Number {
    type Error = InvalidNumber;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Number> for u8 {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
