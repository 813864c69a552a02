use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPencil, FaTrash};
use dioxus_free_icons::Icon;

use crate::model::item::ItemDto;

#[component]
pub fn ItemTable(
    items: Vec<ItemDto>,
    on_edit: EventHandler<ItemDto>,
    on_delete: EventHandler<String>,
    on_toggle_availability: EventHandler<ItemDto>,
) -> Element {
    rsx!(
        div { class: "card overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Item" }
                        th { "Category" }
                        th { "Price/Day" }
                        th { "Condition" }
                        th { "Location" }
                        th { "Available" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if items.is_empty() {
                        tr {
                            td { colspan: 7, class: "text-center opacity-70", "No items found" }
                        }
                    }
                    for item in items.iter() {
                        ItemRow {
                            key: "{item.id}",
                            item: item.clone(),
                            on_edit,
                            on_delete,
                            on_toggle_availability,
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ItemRow(
    item: ItemDto,
    on_edit: EventHandler<ItemDto>,
    on_delete: EventHandler<String>,
    on_toggle_availability: EventHandler<ItemDto>,
) -> Element {
    let edit_item = item.clone();
    let toggle_item = item.clone();
    let delete_id = item.id.clone();
    let location = item.location.clone().unwrap_or_else(|| "—".to_string());

    rsx!(
        tr {
            td {
                div { class: "flex gap-2 items-center",
                    if let Some(image) = item.images.first() {
                        div { class: "w-12 h-12 rounded",
                            img { class: "object-cover w-full h-full", src: "{image}", alt: "{item.title}" }
                        }
                    }
                    div {
                        p { class: "font-semibold", "{item.title}" }
                        if let Some(brand) = &item.brand {
                            p { class: "text-sm opacity-70", "{brand}" }
                        }
                    }
                }
            }
            td { "{item.category}" }
            td { {format!("${:.2}", item.price_per_day)} }
            td { "{item.condition}" }
            td { "{location}" }
            td {
                input {
                    r#type: "checkbox",
                    class: "toggle toggle-success",
                    checked: item.available,
                    onchange: move |_| on_toggle_availability.call(toggle_item.clone()),
                }
            }
            td {
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| on_edit.call(edit_item.clone()),
                        Icon { width: 16, height: 16, icon: FaPencil }
                    }
                    button {
                        class: "btn btn-ghost btn-sm text-error",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { width: 16, height: 16, icon: FaTrash }
                    }
                }
            }
        }
    )
}
