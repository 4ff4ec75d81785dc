//! Glue between typed input, countdown ticks and the round engine.

use std::io::Write;

use rand::Rng;
use rand::rngs::StdRng;

use handcount_config::{FeedbackMessages, HandcountConfig};
use handcount_engine::{
    Outcome, Resolution, RoundEngine, RoundPhase, Scheduler, Tick, feedback_text,
};

use crate::terminal::{TerminalView, countdown_line, summary_lines};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Answer(i64),
    Next,
    Quit,
    Unknown(String),
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Command::Quit,
            "n" | "next" | "" => Command::Next,
            other => other
                .parse::<i64>()
                .map_or_else(|_| Command::Unknown(trimmed.to_string()), Command::Answer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Session<S: Scheduler, W: Write, R: Rng = StdRng> {
    engine: RoundEngine<S, R>,
    view: TerminalView<W>,
    messages: FeedbackMessages,
    title: String,
}

impl<S: Scheduler, W: Write, R: Rng> Session<S, W, R> {
    pub fn new(engine: RoundEngine<S, R>, view: TerminalView<W>, config: &HandcountConfig) -> Self {
        Self {
            engine,
            view,
            messages: config.messages(),
            title: config.title().to_string(),
        }
    }

    pub fn start(&mut self) {
        let title = self.title.clone();
        self.view.styled("accent", &title);
        self.view.line("Type the number you see, n for the next round, q to quit.");
        self.next_round();
    }

    pub fn handle_line(&mut self, line: &str) -> Control {
        match Command::parse(line) {
            Command::Quit => return Control::Quit,
            Command::Answer(value) => match self.engine.submit_answer(value) {
                Ok(Some(result)) => self.show_resolution(result.into()),
                Ok(None) => self.view.line("This round is over. Type n for the next one."),
                Err(err) => self.view.line(&format!("{err}.")),
            },
            Command::Next => match self.engine.phase() {
                RoundPhase::InProgress => self.view.line("Answer first, or wait for the timer."),
                RoundPhase::Idle | RoundPhase::Resolved(_) => self.next_round(),
            },
            Command::Unknown(raw) => {
                tracing::debug!(input = %raw, "Unrecognized input");
                self.view.line("Type a number, n for the next round, or q to quit.");
            }
        }
        Control::Continue
    }

    pub fn handle_tick(&mut self, tick: Tick) {
        if let Some(result) = self.engine.on_tick(tick) {
            self.show_resolution(result.into());
            return;
        }
        if self.engine.phase() != RoundPhase::InProgress {
            return;
        }
        if let Some(line) = self
            .engine
            .round()
            .and_then(|round| countdown_line(round.time_remaining()))
        {
            self.view.styled("timer", &line);
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn engine(&self) -> &RoundEngine<S, R> {
        &self.engine
    }

    /// Print the session summary and hand back the writer.
    pub fn finish(mut self) -> W {
        self.view.line("");
        for line in summary_lines(&self.engine.stats(), self.engine.score()) {
            self.view.line(&line);
        }
        tracing::info!(
            rounds = self.engine.stats().rounds,
            score = self.engine.score(),
            "Session finished"
        );
        self.view.into_inner()
    }

    fn next_round(&mut self) {
        self.view.line("");
        let remaining = self.engine.start_round(&mut self.view).time_remaining();
        if let Some(line) = countdown_line(remaining) {
            self.view.styled("timer", &line);
        }
    }

    fn show_resolution(&mut self, resolution: Resolution) {
        let text = feedback_text(&resolution, &self.messages);
        let key = match resolution.outcome() {
            Outcome::Correct => "correct",
            Outcome::Incorrect => "incorrect",
            Outcome::Timeout => "timer",
        };
        self.view.styled(key, &text);
        self.view.line(&format!(
            "Score: {}  Streak: {}",
            self.engine.score(),
            self.engine.streak()
        ));
        self.view.line("Type n for the next round.");
    }
}
