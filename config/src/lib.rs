//! Host configuration for Handcount.
//!
//! Configuration is optional. A missing file means defaults; a file that exists
//! but cannot be read or parsed is reported as a [`ConfigError`].
//!
//! Nothing here affects gameplay: the engine only ever sees the feedback
//! templates in [`FeedbackMessages`].

mod messages;
mod theme;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub use messages::FeedbackMessages;
pub use theme::Theme;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "HANDCOUNT_CONFIG";

const DEFAULT_TITLE: &str = "How many fingers?";

#[derive(Debug, Default, Deserialize)]
pub struct HandcountConfig {
    pub app: Option<AppConfig>,
    pub messages: Option<FeedbackMessages>,
    pub theme: Option<Theme>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Heading shown above each round.
    pub title: Option<String>,
    /// Use ASCII-only glyphs for hands.
    #[serde(default)]
    pub ascii_only: bool,
}

impl HandcountConfig {
    /// Load from [`config_path`]. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Parse TOML content, expanding `${VAR}` references in message templates.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        if let Some(messages) = config.messages.as_mut() {
            messages.expand_env();
        }
        Ok(config)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.app
            .as_ref()
            .and_then(|app| app.title.as_deref())
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.ascii_only)
    }

    #[must_use]
    pub fn messages(&self) -> FeedbackMessages {
        self.messages.clone().unwrap_or_default()
    }

    /// Configured theme layered over the default palette.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::default();
        if let Some(overrides) = self.theme.clone() {
            theme.merge(overrides);
        }
        theme
    }
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}

/// `$HANDCOUNT_CONFIG` if set, otherwise `~/.handcount/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".handcount").join("config.toml"))
}
