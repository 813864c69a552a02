use dioxus::prelude::*;

/// Inline failure banner shown when a page's fetch fails. The collection
/// underneath is left as-is rather than silently emptied.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx!(
        div { class: "alert alert-error mb-4",
            p { "{message}" }
        }
    )
}
