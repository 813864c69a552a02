use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// Overlay hosting a form or document viewer. The close button mirrors
/// the caller's cancel path.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl",
                div { class: "flex justify-between items-center mb-6",
                    h2 { class: "text-xl font-bold", "{title}" }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost btn-sm btn-circle",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 20, height: 20, icon: FaXmark }
                    }
                }
                {children}
            }
        }
    )
}

/// Interactive confirmation required before any delete reaches the data
/// source.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-error",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    )
}
