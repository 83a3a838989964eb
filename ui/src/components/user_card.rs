use api::user::User;
use dioxus::prelude::*;

use crate::Route;

/// One grid cell of the user list. The whole card links to the detail page.
#[component]
pub fn UserCard(user: User) -> Element {
    rsx! {
        Link {
            class: "user-card",
            to: Route::UserDetail { id: user.id.to_string() },
            article {
                h5 { "{user.name}" }
                p { small { "{user.email}" } }
                p { small { "{user.address.city}" } }
            }
        }
    }
}
