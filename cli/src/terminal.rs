//! Line-oriented terminal rendering for a round.
//!
//! Everything is written as whole lines so output stays readable when stdout
//! is piped. Colors come from the configured [`Theme`] and are skipped entirely
//! when disabled.

use std::io::Write;

use crossterm::style::{Color, Stylize, style};

use handcount_config::Theme;
use handcount_engine::{HandGroups, Number, RoundView, SessionStats};

const HAND_GAP: &str = "   ";

/// Theme lookup with an on/off switch for ANSI color.
#[derive(Debug, Clone)]
pub struct Palette {
    theme: Theme,
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub fn new(theme: Theme, enabled: bool) -> Self {
        Self { theme, enabled }
    }

    #[cfg(test)]
    #[must_use]
    pub fn plain() -> Self {
        Self::new(Theme::default(), false)
    }

    /// Color `text` with the theme entry `key`. Unknown keys and unparsable
    /// colors leave the text as-is.
    #[must_use]
    pub fn paint(&self, key: &str, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match self.theme.get(key).and_then(|name| Color::try_from(name).ok()) {
            Some(color) => style(text).with(color).to_string(),
            None => {
                tracing::debug!(key, "No usable theme color");
                text.to_string()
            }
        }
    }
}

/// Fingers drawn one glyph each, hands separated by a gap.
#[must_use]
pub fn hands_line(hands: &HandGroups, ascii_only: bool) -> String {
    let finger = if ascii_only { "|" } else { "┃" };
    hands
        .hands()
        .iter()
        .map(|&fingers| finger.repeat(usize::from(fingers)))
        .collect::<Vec<_>>()
        .join(HAND_GAP)
}

#[must_use]
pub fn options_line(options: &[Number]) -> String {
    options
        .iter()
        .map(|option| format!("( {option} )"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Countdown announcements: every five seconds, then each of the last three.
#[must_use]
pub fn countdown_line(seconds: u32) -> Option<String> {
    match seconds {
        0 => None,
        1..=3 => Some(format!("{seconds}...")),
        s if s % 5 == 0 => Some(format!("{s}s left")),
        _ => None,
    }
}

#[must_use]
pub fn summary_lines(stats: &SessionStats, score: u32) -> Vec<String> {
    vec![
        format!("Rounds played: {}", stats.rounds),
        format!(
            "Correct: {}  Wrong: {}  Timed out: {}",
            stats.correct, stats.incorrect, stats.timeouts
        ),
        format!("Best streak: {}", stats.best_streak),
        format!("Final score: {score}"),
    ]
}

/// [`RoundView`] that prints to any writer.
pub struct TerminalView<W: Write> {
    out: W,
    palette: Palette,
    ascii_only: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, palette: Palette, ascii_only: bool) -> Self {
        Self {
            out,
            palette,
            ascii_only,
        }
    }

    /// Write one line. Failures are logged; the game carries on.
    pub fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            tracing::warn!(%err, "Failed to write to terminal");
        }
    }

    pub fn styled(&mut self, key: &str, text: &str) {
        let painted = self.palette.paint(key, text);
        self.line(&painted);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RoundView for TerminalView<W> {
    fn render_hands(&mut self, hands: &HandGroups) {
        let drawn = hands_line(hands, self.ascii_only);
        self.styled("accent", &drawn);
    }

    fn render_options(&mut self, options: &[Number]) {
        self.line(&options_line(options));
    }

    fn reset_feedback(&mut self) {
        self.line("How many fingers? Type your answer.");
    }
}
