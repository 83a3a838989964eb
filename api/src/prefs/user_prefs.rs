use std::env;

use super::theme::Theme;
use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs. Serialized as JSON by the platform prefs store.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    dark_mode: bool,
}

impl UserPrefs {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Preferences used when nothing has been persisted yet.
    ///
    /// # Environment Variables
    /// - `DARK_MODE`: "true" or "1" (case-insensitive) starts in dark mode.
    ///   Defaults to light.
    pub fn from_env() -> Self {
        let dark_mode = env::var("DARK_MODE")
            .map(|val| val.eq_ignore_ascii_case("true") || val == "1")
            .unwrap_or(false);
        Self { dark_mode }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// The same prefs with the theme flipped.
    pub fn toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
