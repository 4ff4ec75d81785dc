//! Multiple-choice option generation.

use rand::Rng;
use rand::seq::SliceRandom;

use handcount_types::Number;

/// Buttons offered per round.
pub const OPTION_COUNT: usize = 4;

/// Build the options for a round: `correct` plus three distinct distractors, shuffled.
///
/// Distractors are the first three entries of a shuffled `1..=10` without `correct`,
/// so the result is always exactly [`OPTION_COUNT`] unique numbers.
pub fn generate_options<R: Rng + ?Sized>(correct: Number, rng: &mut R) -> [Number; OPTION_COUNT] {
    let mut distractors: Vec<Number> = Number::all().filter(|n| *n != correct).collect();
    distractors.shuffle(rng);

    let mut options = [correct; OPTION_COUNT];
    options[1..].copy_from_slice(&distractors[..OPTION_COUNT - 1]);
    options.shuffle(rng);
    options
}
