use handcount_config::FeedbackMessages;
use handcount_types::{Outcome, Resolution};

/// Feedback line for a resolved round, filled from the host's templates.
#[must_use]
pub fn feedback_text(resolution: &Resolution, messages: &FeedbackMessages) -> String {
    let number = resolution.correct_number();
    match resolution.outcome() {
        Outcome::Correct => messages.correct(resolution.points_awarded(), number),
        Outcome::Incorrect => messages.incorrect(number),
        Outcome::Timeout => messages.timeout(number),
    }
}
