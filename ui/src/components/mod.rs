//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, cards and the pagination bar.
pub mod empty_state;
pub mod pagination;
pub mod pico;
pub mod theme_toggle;
pub mod user_card;
