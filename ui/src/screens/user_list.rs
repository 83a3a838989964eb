//=============================================================================
// File: src/screens/user_list.rs
//=============================================================================
use api::user_query::derive_page;
use api::user_query::UserQuery;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pagination::Pagination;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Loading;
use crate::components::user_card::UserCard;
use crate::hooks::use_view_state::use_view_state;
use crate::view_state::ViewState;

pub const USERS_FAILURE_MESSAGE: &str = "Failed to load users. Please try again later.";

fn no_match_description(search: &str) -> String {
    if search.is_empty() {
        String::new()
    } else {
        format!("No user name contains \"{search}\".")
    }
}

#[allow(non_snake_case)]
#[component]
pub fn UserListScreen() -> Element {
    let users = use_view_state(api::users, USERS_FAILURE_MESSAGE);
    let mut query = use_signal(UserQuery::default);

    // Recomputed only when the fetched list or the query changes.
    let page = use_memo(move || {
        users
            .read()
            .ready()
            .map(|list| derive_page(list, &query.read()))
            .unwrap_or_default()
    });

    rsx! {
        match &*users.read() {
            ViewState::Loading => rsx! {
                Loading { label: "Loading users..." }
            },
            ViewState::Error(message) => rsx! {
                Card {
                    p {
                        class: "error-text",
                        "{message}"
                    }
                }
            },
            ViewState::Ready(_) => {
                let page = page.read().clone();
                rsx! {
                    div {
                        class: "list-toolbar",
                        input {
                            r#type: "search",
                            placeholder: "Search by name",
                            value: "{query.read().search()}",
                            oninput: move |evt| query.write().set_search(evt.value()),
                        }
                        Button {
                            button_type: ButtonType::Contrast,
                            on_click: move |_| query.write().toggle_sort(),
                            "Sort: {query.read().sort_order().label()}"
                        }
                    }

                    if page.users.is_empty() {
                        EmptyState {
                            title: "No users found",
                            description: no_match_description(query.read().search()),
                            icon: rsx! { span { "🔍" } },
                        }
                    } else {
                        Grid {
                            for user in page.users.iter() {
                                UserCard {
                                    key: "{user.id}",
                                    user: user.clone(),
                                }
                            }
                        }
                    }

                    Pagination {
                        info: page.info,
                        on_change: move |target| query.write().go_to_page(target),
                    }
                }
            }
        }
    }
}
