use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Rently Admin" }
        Page {
            div { class: "flex flex-col items-center justify-center p-12 gap-4",
                h1 { class: "text-4xl font-bold", "404" }
                p { class: "opacity-70", "No page exists at /{path}" }
                Link { class: "btn btn-primary", to: Route::Dashboard {},
                    "Back to Dashboard"
                }
            }
        }
    )
}
