use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::page::Loading;
use crate::client::components::reviews::{ReviewFormModal, ReviewTable};
use crate::client::components::{ConfirmDialog, ErrorBanner, Page};
use crate::client::controller::filter::ReviewFilter;
use crate::client::controller::list::ListState;
use crate::client::data::DataHandle;
use crate::model::review::{ReviewDto, ReviewPayload};

#[component]
pub fn Reviews() -> Element {
    let data = use_context::<DataHandle>();
    let mut list = use_signal(ListState::<ReviewDto>::new);
    let mut search = use_signal(String::new);
    let mut rating_filter = use_signal(|| None::<u8>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<ReviewDto>);
    let mut pending_delete = use_signal(|| None::<String>);

    {
        let data = data.clone();
        use_future(move || {
            let data = data.clone();
            async move {
                match data.fetch_reviews().await {
                    Ok(reviews) => list.write().set_loaded(reviews),
                    Err(err) => {
                        tracing::error!("failed to load reviews: {err}");
                        list.write().set_failed(err.to_string());
                    }
                }
            }
        });
    }

    let filter = ReviewFilter {
        search: search.read().clone(),
        rating: *rating_filter.read(),
    };
    let visible = filter.apply(list.read().entries());
    let load_error = list.read().error().map(str::to_string);

    let on_save = {
        let data = data.clone();
        move |payload: ReviewPayload| {
            let data = data.clone();
            let current = editing.peek().clone();
            show_form.set(false);
            editing.set(None);
            spawn(async move {
                let result = match &current {
                    Some(review) => data.update_review(&review.id, payload).await,
                    None => data.create_review(payload).await,
                };
                match result {
                    Ok(review) => list.write().upsert(review),
                    Err(err) => tracing::error!("failed to save review: {err}"),
                }
            });
        }
    };

    let on_confirm_delete = {
        let data = data.clone();
        move |_| {
            let Some(id) = pending_delete.peek().clone() else {
                return;
            };
            pending_delete.set(None);
            let data = data.clone();
            spawn(async move {
                match data.remove_review(&id).await {
                    Ok(()) => list.write().remove(&id),
                    Err(err) => tracing::error!("failed to delete review: {err}"),
                }
            });
        }
    };

    rsx!(
        Title { "Reviews | Rently Admin" }
        Page {
            div { class: "flex justify-between items-center mb-6",
                h1 { class: "text-2xl font-bold", "Reviews Management" }
                button {
                    class: "btn btn-primary flex gap-1",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    Icon { width: 16, height: 16, icon: FaPlus }
                    p { "Add Review" }
                }
            }

            div { class: "card mb-6 p-4",
                div { class: "flex flex-col md:flex-row gap-4",
                    label { class: "input input-bordered flex items-center gap-2 flex-1",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                        input {
                            class: "grow",
                            placeholder: "Search reviews...",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                    select {
                        class: "select select-bordered w-full md:w-48",
                        onchange: move |evt| rating_filter.set(evt.value().parse::<u8>().ok()),
                        option { value: "ALL", "All Ratings" }
                        for rating in 1..=5u8 {
                            option { value: "{rating}",
                                if rating == 1 { "1 Star" } else { "{rating} Stars" }
                            }
                        }
                    }
                }
            }

            if let Some(message) = load_error {
                ErrorBanner { message }
            }

            if list.read().is_loading() {
                Loading {}
            } else {
                ReviewTable {
                    reviews: visible,
                    on_edit: move |review| {
                        editing.set(Some(review));
                        show_form.set(true);
                    },
                    on_delete: move |id| pending_delete.set(Some(id)),
                }
            }

            if show_form() {
                ReviewFormModal {
                    review: editing.read().clone(),
                    on_save,
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                }
            }

            if pending_delete.read().is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this review?",
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    )
}
