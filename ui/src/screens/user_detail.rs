// File: src/screens/user_detail.rs
use api::user::User;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Loading;
use crate::hooks::use_view_state::use_view_state;
use crate::view_state::ViewState;
use crate::Route;

pub const USER_FAILURE_MESSAGE: &str = "Failed to load user details. Please try again later.";

#[component]
fn DetailRow(label: &'static str, children: Element) -> Element {
    rsx! {
        p {
            "{label}: "
            strong { {children} }
        }
    }
}

#[component]
fn UserDetailCard(user: User) -> Element {
    let navigator = use_navigator();
    let website_url = user.website_url();

    rsx! {
        Card {
            h2 { "{user.name}" }
            DetailRow { label: "Email", "{user.email}" }
            DetailRow { label: "Phone", "{user.phone}" }
            DetailRow { label: "Company", "{user.company.name}" }
            DetailRow {
                label: "Website",
                a {
                    href: "{website_url}",
                    target: "_blank",
                    rel: "noreferrer",
                    "{user.website}"
                }
            }
            footer {
                Button {
                    on_click: move |_| {
                        navigator.push(Route::UserList {});
                    },
                    "Go Back"
                }
            }
        }
    }
}

/// Detail page for the user with `id`.
///
/// Mounted under a key derived from `id`, so a different id starts over at
/// the loading state with a fresh request.
#[allow(non_snake_case)]
#[component]
pub fn UserDetailScreen(id: String) -> Element {
    let user = use_view_state(move || api::user(id.clone()), USER_FAILURE_MESSAGE);

    rsx! {
        match &*user.read() {
            ViewState::Loading => rsx! {
                Loading { label: "Loading user details..." }
            },
            ViewState::Error(message) => rsx! {
                Card {
                    p {
                        class: "error-text",
                        "{message}"
                    }
                }
            },
            ViewState::Ready(user) => rsx! {
                UserDetailCard { user: user.clone() }
            },
        }
    }
}
