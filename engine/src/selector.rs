//! Target number selection without immediate repeats.

use std::collections::BTreeSet;

use rand::{Rng, RngExt};

use handcount_types::Number;

/// Numbers remembered before the window is cleared.
pub const RECENT_CAPACITY: usize = 8;

/// Consecutive rejected samples tolerated before the window is cleared.
pub const MAX_REJECTIONS: u32 = 20;

/// Recently shown numbers. Never holds more than [`RECENT_CAPACITY`] entries.
#[derive(Debug, Clone, Default)]
pub struct RecentNumbers {
    numbers: BTreeSet<Number>,
}

impl RecentNumbers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, number: Number) -> bool {
        self.numbers.contains(&number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    /// Remember `number`, first clearing the window if it is already full.
    pub fn record(&mut self, number: Number) {
        if self.numbers.len() >= RECENT_CAPACITY {
            tracing::trace!("Recent window full, clearing");
            self.numbers.clear();
        }
        self.numbers.insert(number);
    }
}

/// Pick the next target, avoiding anything in `recent`, and record it.
///
/// Sampling is uniform with rejection. After [`MAX_REJECTIONS`] misses in a row the
/// window is cleared and the next sample is taken as-is.
pub fn next_number<R: Rng + ?Sized>(recent: &mut RecentNumbers, rng: &mut R) -> Number {
    let mut rejections = 0;
    let number = loop {
        let candidate = sample(rng);
        if !recent.contains(candidate) {
            break candidate;
        }
        rejections += 1;
        if rejections >= MAX_REJECTIONS {
            tracing::debug!(rejections, "Too many repeats, clearing recent window");
            recent.clear();
            break sample(rng);
        }
    };
    recent.record(number);
    number
}

fn sample<R: Rng + ?Sized>(rng: &mut R) -> Number {
    Number::ALL[rng.random_range(0..Number::SPAN)]
}
