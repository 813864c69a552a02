use dioxus::prelude::*;

use crate::client::components::Modal;
use crate::model::seller::{SellerDecision, SellerRequestDto};

/// Document-review modal: shows every submitted identity document and
/// offers the same approve/reject actions as the table row.
#[component]
pub fn DocumentModal(
    request: SellerRequestDto,
    on_decide: EventHandler<(String, SellerDecision)>,
    on_close: EventHandler<()>,
) -> Element {
    let approve_id = request.id.clone();
    let reject_id = request.id.clone();

    rsx!(
        Modal {
            title: "Documents for {request.name}",
            on_close: move |_| on_close.call(()),
            if request.documents.is_empty() {
                p { class: "opacity-70", "No documents were submitted with this request." }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                for document in request.documents.iter() {
                    div { class: "card bg-base-200 p-4",
                        p { class: "font-semibold mb-2", "{document.kind}" }
                        img { class: "rounded", src: "{document.url}", alt: "{document.kind}" }
                    }
                }
            }
            div { class: "modal-action",
                button {
                    class: "btn btn-error",
                    onclick: move |_| on_decide.call((reject_id.clone(), SellerDecision::Reject)),
                    "Reject"
                }
                button {
                    class: "btn btn-success",
                    onclick: move |_| on_decide.call((approve_id.clone(), SellerDecision::Approve)),
                    "Approve"
                }
            }
        }
    )
}
