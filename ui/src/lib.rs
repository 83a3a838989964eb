// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
mod screens;
pub mod theme;
pub mod view_state;

#[cfg(test)]
mod test_support;

use components::pico::Container;
use components::theme_toggle::ThemeToggle;
use screens::user_detail::UserDetailScreen;
use screens::user_list::UserListScreen;
use theme::root_theme_script;
use theme::use_theme;
use theme::use_theme_provider;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Navigable paths. The detail `id` is opaque and forwarded to the API as is.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        UserList {},
        #[route("/user/:id")]
        UserDetail { id: String },
}

#[component]
fn UserList() -> Element {
    rsx! { UserListScreen {} }
}

#[component]
fn UserDetail(id: String) -> Element {
    rsx! {
        UserDetailScreen {
            key: "{id}",
            id: id.clone(),
        }
    }
}

/// Header with the title and theme toggle above the active route.
#[component]
fn AppLayout() -> Element {
    let theme_state = use_theme();
    let theme = theme_state.theme();

    // `<html>` carries the theme too, for the background outside the container.
    use_effect(move || {
        let _ = document::eval(&root_theme_script(theme_state.theme()));
    });

    rsx! {
        div {
            class: "app-main-container",
            "data-theme": theme.name(),
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "User Management App"
                                }
                            }
                        }
                        ul {
                            li { ThemeToggle {} }
                        }
                    }
                }
                div {
                    class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    use_theme_provider();

    let app_css = r#"
    html, body { margin: 0; padding: 0; }

    .app-main-container {
        min-height: 100vh;
        background-color: var(--pico-background-color);
        color: var(--pico-color);
        transition: background-color 0.3s ease-in-out, color 0.3s ease-in-out;
    }

    .app-main-container header nav { box-shadow: 0 1px 0 var(--pico-muted-border-color); }

    .theme-toggle-icon { margin-right: 0.5rem; }
    @media (max-width: 768px) { .theme-toggle-label { display: none; } }

    .list-toolbar { display: flex; gap: 1rem; align-items: center; margin: 1rem 0 2rem 0; }
    .list-toolbar input { margin-bottom: 0; }
    .list-toolbar button { white-space: nowrap; }

    .user-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
        gap: 1.5rem;
    }
    .user-card { text-decoration: none; color: inherit; }
    .user-card article { height: 100%; margin: 0; transition: transform 0.3s; }
    .user-card article:hover { transform: scale(1.05); }
    .user-card small { color: var(--pico-muted-color); }

    .pagination { display: flex; justify-content: center; flex-wrap: wrap; gap: 0.5rem; margin: 2rem 0; }

    .error-text { text-align: center; color: var(--pico-del-color); }

    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 2rem;
        text-align: center;
        color: var(--pico-muted-color);
        border: 2px dashed var(--pico-card-border-color);
        border-radius: var(--pico-border-radius);
    }
    .empty-state-icon { font-size: 3rem; margin-bottom: 1rem; opacity: 0.8; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{app_css}"
        }
        Router::<Route> {}
    }
}
