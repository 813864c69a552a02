use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen p-6 {class}",
            {children}
        }
    )
}

/// Centered spinner shown while a page's initial fetch is in flight.
#[component]
pub fn Loading() -> Element {
    rsx!(
        div { class: "card p-12 flex justify-center",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
