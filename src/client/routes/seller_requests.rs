use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::page::Loading;
use crate::client::components::sellers::{DocumentModal, SellerRequestTable};
use crate::client::components::{ErrorBanner, Page};
use crate::client::controller::list::ListState;
use crate::client::controller::stats::RequestStats;
use crate::client::data::DataHandle;
use crate::model::seller::{SellerDecision, SellerRequestDto, SellerStatus};

#[component]
pub fn SellerRequests() -> Element {
    let data = use_context::<DataHandle>();
    let mut list = use_signal(ListState::<SellerRequestDto>::new);
    let mut stats = use_signal(RequestStats::default);
    let mut selected = use_signal(|| None::<SellerRequestDto>);

    {
        let data = data.clone();
        use_future(move || {
            let data = data.clone();
            async move {
                match data.fetch_seller_requests().await {
                    Ok(requests) => {
                        stats.set(RequestStats::from_requests(&requests));
                        list.write().set_loaded(requests);
                    }
                    Err(err) => {
                        tracing::error!("failed to load seller requests: {err}");
                        list.write().set_failed(err.to_string());
                    }
                }
            }
        });
    }

    // The table only shows requests still awaiting a decision; decided
    // ones survive in the list to keep the stat cards honest.
    let pending: Vec<SellerRequestDto> = list
        .read()
        .entries()
        .iter()
        .filter(|request| request.status == SellerStatus::Pending)
        .cloned()
        .collect();
    let load_error = list.read().error().map(str::to_string);
    let current = *stats.read();

    let on_decide = {
        let data = data.clone();
        move |(id, decision): (String, SellerDecision)| {
            let previous = match list.peek().get(&id) {
                Some(request) => request.status,
                None => return,
            };
            if previous.is_terminal() {
                return;
            }
            if selected.peek().as_ref().is_some_and(|request| request.id == id) {
                selected.set(None);
            }
            let data = data.clone();
            spawn(async move {
                match data.review_seller_request(&id, decision).await {
                    Ok(updated) => {
                        stats.write().apply_decision(previous, decision);
                        list.write().upsert(updated);
                    }
                    Err(err) => tracing::error!("failed to review seller request: {err}"),
                }
            });
        }
    };

    rsx!(
        Title { "Seller Requests | Rently Admin" }
        Page {
            h1 { class: "text-2xl font-bold mb-6", "Seller Requests" }

            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-6",
                StatTile { label: "Total Requests", value: current.total }
                StatTile { label: "Pending", value: current.pending }
                StatTile { label: "Approved", value: current.approved }
                StatTile { label: "Rejected", value: current.rejected }
            }

            if let Some(message) = load_error {
                ErrorBanner { message }
            }

            if list.read().is_loading() {
                Loading {}
            } else {
                SellerRequestTable {
                    requests: pending,
                    on_decide: on_decide.clone(),
                    on_view_documents: move |request| selected.set(Some(request)),
                }
            }

            if let Some(request) = selected.read().clone() {
                DocumentModal {
                    request,
                    on_decide,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    )
}

#[component]
fn StatTile(label: String, value: usize) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow p-4",
            p { class: "text-sm opacity-70", "{label}" }
            p { class: "text-2xl font-bold", "{value}" }
        }
    )
}
