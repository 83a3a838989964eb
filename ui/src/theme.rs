//! The shared light/dark preference.

use api::prefs::theme::Theme;
use api::prefs::user_prefs::UserPrefs;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::compat;

/// Provided as a Dioxus context by the root component. Every consumer reads
/// the same signal, so a toggle re-renders all of them at once.
#[derive(Clone, Copy)]
pub struct ThemeState {
    prefs: Signal<UserPrefs>,
}

impl ThemeState {
    pub fn new(prefs: Signal<UserPrefs>) -> Self {
        Self { prefs }
    }

    pub fn theme(&self) -> Theme {
        self.prefs.read().theme()
    }

    /// Flips the theme and persists it for future sessions.
    ///
    /// A failed write is logged; the in-memory change stands either way.
    pub fn toggle(&mut self) {
        let next = self.prefs.peek().toggled();
        self.prefs.set(next);

        if let Err(e) = compat::save_user_prefs(&next) {
            tracing::warn!("could not persist theme preference: {}", e);
        }
    }
}

/// Creates the theme context from persisted prefs. Call once, at the root.
pub fn use_theme_provider() -> ThemeState {
    let prefs = use_signal(compat::load_initial_prefs);
    use_context_provider(|| ThemeState::new(prefs))
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

/// Script that sets Pico's `data-theme` attribute on the document element.
pub fn root_theme_script(theme: Theme) -> String {
    format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        theme.name()
    )
}
