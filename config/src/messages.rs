use serde::Deserialize;

use handcount_types::Number;

use crate::expand_env_vars;

const POINTS_PLACEHOLDER: &str = "{points}";
const NUMBER_PLACEHOLDER: &str = "{number}";

/// Feedback copy shown after each round.
///
/// ```toml
/// [messages]
/// correct = "Correct! +{points} points"
/// incorrect = "Not quite. The answer was {number}."
/// timeout = "Time's up! The answer was {number}."
/// ```
///
/// `{points}` and `{number}` are filled in when the message is rendered.
/// Missing keys fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedbackMessages {
    pub correct: String,
    pub incorrect: String,
    pub timeout: String,
}

impl Default for FeedbackMessages {
    fn default() -> Self {
        Self {
            correct: "Correct! +{points} points".to_string(),
            incorrect: "Not quite. The answer was {number}.".to_string(),
            timeout: "Time's up! The answer was {number}.".to_string(),
        }
    }
}

impl FeedbackMessages {
    #[must_use]
    pub fn correct(&self, points: u32, number: Number) -> String {
        fill(&self.correct, points, number)
    }

    #[must_use]
    pub fn incorrect(&self, number: Number) -> String {
        fill(&self.incorrect, 0, number)
    }

    #[must_use]
    pub fn timeout(&self, number: Number) -> String {
        fill(&self.timeout, 0, number)
    }

    pub(crate) fn expand_env(&mut self) {
        for template in [&mut self.correct, &mut self.incorrect, &mut self.timeout] {
            *template = expand_env_vars(template);
        }
    }
}

fn fill(template: &str, points: u32, number: Number) -> String {
    template
        .replace(POINTS_PLACEHOLDER, &points.to_string())
        .replace(NUMBER_PLACEHOLDER, &number.to_string())
}
