//! Handcount CLI - binary entry point.
//!
//! Runs the round engine as a line-oriented terminal game.
//!
//! ```text
//! main() -> Session::start() -> select! { tick, stdin line } -> Session::finish()
//!                                   |            |
//!                                   v            v
//!                           handle_tick()   handle_line() -> Continue | Quit
//! ```
//!
//! The countdown runs on a [`TokioScheduler`] interval; its ticks and typed
//! lines are handled on the same task, one at a time.

mod session;
mod terminal;

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::{IsTerminal, stdout},
    path::PathBuf,
    sync::Mutex,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use handcount_config::{ConfigError, HandcountConfig};
use handcount_engine::{RoundEngine, TokioScheduler};

use crate::session::{Control, Session};
use crate::terminal::{Palette, TerminalView};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Logs never go to stdout; that is where the game is drawn.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config file, ~/.handcount/logs/handcount.log
    if let Some(config_path) = HandcountConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("handcount.log"));
    }

    candidates.push(PathBuf::from(".handcount").join("logs").join("handcount.log"));

    candidates
}

/// Resolve the loaded config, plus a one-line notice when a broken file was
/// skipped. The details are already in the log; the notice is printed once,
/// before the first round is drawn.
fn config_or_default(
    loaded: Result<Option<HandcountConfig>, ConfigError>,
) -> (HandcountConfig, Option<String>) {
    match loaded {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (
            HandcountConfig::default(),
            Some(format!(
                "handcount: could not use {}, playing with default settings",
                err.path().display()
            )),
        ),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let (config, notice) = config_or_default(HandcountConfig::load());
    if let Some(notice) = notice {
        eprintln!("{notice}");
    }
    let out = stdout();
    let palette = Palette::new(config.theme(), out.is_terminal());
    let view = TerminalView::new(out, palette, config.ascii_only());

    let (scheduler, mut ticks) = TokioScheduler::new();
    let mut session = Session::new(RoundEngine::new(scheduler), view, &config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    session.start();

    let result: Result<()> = loop {
        tokio::select! {
            Some(tick) = ticks.recv() => session.handle_tick(tick),
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if session.handle_line(&line) == Control::Quit {
                        break Ok(());
                    }
                }
                // EOF ends the game like `q`.
                Ok(None) => break Ok(()),
                Err(err) => break Err(err.into()),
            },
        }
    };

    session.finish();
    result
}
