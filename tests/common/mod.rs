//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use handcount_engine::{HandGroups, ManualScheduler, Number, RoundEngine, RoundView};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// View that remembers what the engine asked it to draw.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub hands: Vec<Vec<u8>>,
    pub options: Vec<Vec<Number>>,
    pub feedback_resets: usize,
}

impl RoundView for RecordingView {
    fn render_hands(&mut self, hands: &HandGroups) {
        self.hands.push(hands.hands().to_vec());
    }

    fn render_options(&mut self, options: &[Number]) {
        self.options.push(options.to_vec());
    }

    fn reset_feedback(&mut self) {
        self.feedback_resets += 1;
    }
}

/// Engine on virtual time with a fixed seed.
pub fn seeded_engine(seed: u64) -> RoundEngine<ManualScheduler> {
    RoundEngine::with_rng(ManualScheduler::new(), StdRng::seed_from_u64(seed))
}

pub fn n(value: u8) -> Number {
    Number::new(value).unwrap()
}
