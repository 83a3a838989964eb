//! The loading/error/ready outcome of a screen's fetch.

use std::fmt::Display;

/// Exactly one of these holds for a screen at any time.
#[derive(Clone, PartialEq, Debug, strum::EnumIs)]
pub enum ViewState<T> {
    Loading,
    /// A fixed, user-facing message. The underlying error is only logged.
    Error(String),
    Ready(T),
}

impl<T: Clone> ViewState<T> {
    /// Maps a resource outcome (`None` while in flight) to a view state.
    pub fn from_outcome<E: Display>(outcome: Option<&Result<T, E>>, failure_message: &str) -> Self {
        match outcome {
            None => Self::Loading,
            Some(Ok(value)) => Self::Ready(value.clone()),
            Some(Err(_)) => Self::Error(failure_message.to_string()),
        }
    }
}

impl<T> ViewState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}
