use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::theme::use_theme;

/// Header button that flips between light and dark mode.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme_state = use_theme();
    let theme = theme_state.theme();

    rsx! {
        Button {
            button_type: if theme.is_dark() { ButtonType::Contrast } else { ButtonType::Secondary },
            aria_label: "Toggle Theme".to_string(),
            on_click: move |_| theme_state.toggle(),
            span {
                class: "theme-toggle-icon",
                "{theme.toggle_icon()}"
            }
            span {
                class: "theme-toggle-label",
                "{theme.toggle_label()}"
            }
        }
    }
}
