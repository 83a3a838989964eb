//! User preferences that survive between sessions.

pub mod theme;
pub mod user_prefs;
