use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaEye, FaXmark};
use dioxus_free_icons::Icon;

use crate::model::seller::{SellerDecision, SellerRequestDto};

#[component]
pub fn SellerRequestTable(
    requests: Vec<SellerRequestDto>,
    on_decide: EventHandler<(String, SellerDecision)>,
    on_view_documents: EventHandler<SellerRequestDto>,
) -> Element {
    rsx!(
        div { class: "card overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Requester" }
                        th { "Email" }
                        th { "Submitted" }
                        th { "Documents" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if requests.is_empty() {
                        tr {
                            td { colspan: 5, class: "text-center opacity-70",
                                "No pending seller requests"
                            }
                        }
                    }
                    for request in requests.iter() {
                        RequestRow {
                            key: "{request.id}",
                            request: request.clone(),
                            on_decide,
                            on_view_documents,
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn RequestRow(
    request: SellerRequestDto,
    on_decide: EventHandler<(String, SellerDecision)>,
    on_view_documents: EventHandler<SellerRequestDto>,
) -> Element {
    let approve_id = request.id.clone();
    let reject_id = request.id.clone();
    let view_request = request.clone();
    let submitted = request.submitted_at.format("%B %e, %Y").to_string();
    let document_count = request.documents.len();

    rsx!(
        tr {
            td { "{request.name}" }
            td { "{request.email}" }
            td { "{submitted}" }
            td {
                button {
                    class: "btn btn-ghost btn-sm flex gap-1",
                    onclick: move |_| on_view_documents.call(view_request.clone()),
                    Icon { width: 16, height: 16, icon: FaEye }
                    p { "{document_count}" }
                }
            }
            td {
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-success btn-sm flex gap-1",
                        onclick: move |_| on_decide.call((approve_id.clone(), SellerDecision::Approve)),
                        Icon { width: 16, height: 16, icon: FaCheck }
                        p { "Approve" }
                    }
                    button {
                        class: "btn btn-error btn-sm flex gap-1",
                        onclick: move |_| on_decide.call((reject_id.clone(), SellerDecision::Reject)),
                        Icon { width: 16, height: 16, icon: FaXmark }
                        p { "Reject" }
                    }
                }
            }
        }
    )
}
