use api::user_query::PageInfo;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Previous / numbered / Next page buttons.
///
/// Out-of-range targets are disabled here; `on_change` receives the raw
/// page number and does no clamping of its own.
#[component]
pub fn Pagination(info: PageInfo, on_change: EventHandler<usize>) -> Element {
    let current = info.current;

    rsx! {
        nav {
            class: "pagination",
            Button {
                button_type: ButtonType::Secondary,
                disabled: !info.has_previous(),
                on_click: move |_| on_change.call(current.saturating_sub(1)),
                "Previous"
            }
            for page in 1..=info.total_pages {
                Button {
                    key: "{page}",
                    button_type: if page == current { ButtonType::Primary } else { ButtonType::Secondary },
                    outline: page != current,
                    on_click: move |_| on_change.call(page),
                    "{page}"
                }
            }
            Button {
                button_type: ButtonType::Secondary,
                disabled: !info.has_next(),
                on_click: move |_| on_change.call(current + 1),
                "Next"
            }
        }
    }
}
