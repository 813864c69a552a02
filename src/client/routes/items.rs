use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::items::{ItemFormModal, ItemTable};
use crate::client::components::page::Loading;
use crate::client::components::{ConfirmDialog, ErrorBanner, Page};
use crate::client::controller::filter::{self, ItemFilter};
use crate::client::controller::list::ListState;
use crate::client::data::DataHandle;
use crate::model::item::{ItemDto, ItemPayload};

#[component]
pub fn Items() -> Element {
    let data = use_context::<DataHandle>();
    let mut list = use_signal(ListState::<ItemDto>::new);
    let mut search = use_signal(String::new);
    let mut category_filter = use_signal(|| None::<String>);
    let mut availability_filter = use_signal(|| None::<bool>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<ItemDto>);
    let mut pending_delete = use_signal(|| None::<String>);

    {
        let data = data.clone();
        use_future(move || {
            let data = data.clone();
            async move {
                match data.fetch_items().await {
                    Ok(items) => list.write().set_loaded(items),
                    Err(err) => {
                        tracing::error!("failed to load items: {err}");
                        list.write().set_failed(err.to_string());
                    }
                }
            }
        });
    }

    let filter = ItemFilter {
        search: search.read().clone(),
        category: category_filter.read().clone(),
        available: *availability_filter.read(),
    };
    // Dropdown options come from the full collection, not the filtered view.
    let categories = filter::category_options(list.read().entries());
    let visible = filter.apply(list.read().entries());
    let load_error = list.read().error().map(str::to_string);

    let on_save = {
        let data = data.clone();
        move |payload: ItemPayload| {
            let data = data.clone();
            let current = editing.peek().clone();
            show_form.set(false);
            editing.set(None);
            spawn(async move {
                let result = match &current {
                    Some(item) => data.update_item(&item.id, payload).await,
                    None => data.create_item(payload).await,
                };
                match result {
                    Ok(item) => list.write().upsert(item),
                    Err(err) => tracing::error!("failed to save item: {err}"),
                }
            });
        }
    };

    let on_toggle_availability = {
        let data = data.clone();
        move |item: ItemDto| {
            let data = data.clone();
            spawn(async move {
                match data.set_item_availability(&item.id, !item.available).await {
                    Ok(updated) => list.write().upsert(updated),
                    Err(err) => tracing::error!("failed to toggle item availability: {err}"),
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
                match data.remove_item(&id).await {
                    Ok(()) => list.write().remove(&id),
                    Err(err) => tracing::error!("failed to delete item: {err}"),
                }
            });
        }
    };

    rsx!(
        Title { "Items | Rently Admin" }
        Page {
            div { class: "flex justify-between items-center mb-6",
                h1 { class: "text-2xl font-bold", "Items Management" }
                button {
                    class: "btn btn-primary flex gap-1",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    Icon { width: 16, height: 16, icon: FaPlus }
                    p { "Add Item" }
                }
            }

            div { class: "card mb-6 p-4",
                div { class: "flex flex-col md:flex-row gap-4",
                    label { class: "input input-bordered flex items-center gap-2 flex-1",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                        input {
                            class: "grow",
                            placeholder: "Search items...",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                    select {
                        class: "select select-bordered w-full md:w-48",
                        onchange: move |evt| {
                            let value = evt.value();
                            category_filter.set((value != "ALL").then_some(value));
                        },
                        option { value: "ALL", "All Categories" }
                        for category in categories.iter() {
                            option { value: "{category}", "{category}" }
                        }
                    }
                    select {
                        class: "select select-bordered w-full md:w-48",
                        onchange: move |evt| {
                            availability_filter.set(match evt.value().as_str() {
                                "AVAILABLE" => Some(true),
                                "UNAVAILABLE" => Some(false),
                                _ => None,
                            });
                        },
                        option { value: "ALL", "All Availability" }
                        option { value: "AVAILABLE", "Available" }
                        option { value: "UNAVAILABLE", "Unavailable" }
                    }
                }
            }

            if let Some(message) = load_error {
                ErrorBanner { message }
            }

            if list.read().is_loading() {
                Loading {}
            } else {
                ItemTable {
                    items: visible,
                    on_edit: move |item| {
                        editing.set(Some(item));
                        show_form.set(true);
                    },
                    on_delete: move |id| pending_delete.set(Some(id)),
                    on_toggle_availability,
                }
            }

            if show_form() {
                ItemFormModal {
                    item: editing.read().clone(),
                    on_save,
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                }
            }

            if pending_delete.read().is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this item?",
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    )
}
