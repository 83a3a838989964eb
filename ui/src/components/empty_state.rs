// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    /// Omitted when empty.
    #[props(default)]
    description: String,
    #[props(default)]
    icon: Option<Element>,
}

/// Dashed placeholder box for a list with nothing to show.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",

            if let Some(icon) = props.icon {
                div {
                    class: "empty-state-icon",
                    {icon}
                }
            }

            h4 {
                style: "margin-bottom: 0.5rem;",
                "{props.title}"
            }

            if !props.description.is_empty() {
                p {
                    style: "max-width: 400px; margin: 0 auto;",
                    "{props.description}"
                }
            }
        }
    }
}
