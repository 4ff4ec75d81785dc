use std::collections::BTreeMap;

use serde::Deserialize;

/// Presentation properties keyed by name (colors, glyphs, labels).
///
/// The engine never reads these; hosts look keys up and may override them at runtime.
///
/// ```toml
/// [theme]
/// accent = "cyan"
/// correct = "green"
/// incorrect = "red"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    properties: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        let properties = [
            ("accent", "cyan"),
            ("correct", "green"),
            ("incorrect", "red"),
            ("timer", "yellow"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
        Self { properties }
    }
}

impl Theme {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Set a property, returning the previous value if there was one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Layer `overrides` on top of this theme; keys absent from `overrides` keep their value.
    pub(crate) fn merge(&mut self, overrides: Theme) {
        self.properties.extend(overrides.properties);
    }
}
