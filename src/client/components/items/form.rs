use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::components::Modal;
use crate::client::form::{ErrorMap, ItemForm};
use crate::model::item::{ItemDto, ItemPayload, CATEGORIES, CONDITIONS};

#[component]
pub fn ItemFormModal(
    item: Option<ItemDto>,
    on_save: EventHandler<ItemPayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if item.is_some() { "Edit Item" } else { "Add Item" };
    let seeded = item.clone();
    let mut form = use_signal(move || match &seeded {
        Some(item) => ItemForm::edit(item),
        None => ItemForm::create(),
    });
    let mut errors = use_signal(ErrorMap::new);
    let mut new_image_url = use_signal(String::new);

    let fields = form.read().clone();
    let messages = errors.read().clone();

    rsx!(
        Modal {
            title: "{title}",
            on_close: move |_| on_cancel.call(()),
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let result = form.read().submit(|payload| on_save.call(payload));
                    errors.set(result);
                },
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    div { class: "md:col-span-2",
                        label { class: "label", "Title *" }
                        input {
                            class: "input input-bordered w-full",
                            value: "{fields.title}",
                            oninput: move |evt| form.write().title = evt.value(),
                        }
                        if let Some(message) = messages.get("title") {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div { class: "md:col-span-2",
                        label { class: "label", "Description" }
                        textarea {
                            class: "textarea textarea-bordered w-full",
                            rows: 3,
                            value: "{fields.description}",
                            oninput: move |evt| form.write().description = evt.value(),
                        }
                    }
                    div {
                        label { class: "label", "Category *" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{fields.category}",
                            onchange: move |evt| form.write().category = evt.value(),
                            for category in CATEGORIES {
                                option { value: "{category}", "{category}" }
                            }
                        }
                        if let Some(message) = messages.get("category") {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label", "Sub-Category" }
                        input {
                            class: "input input-bordered w-full",
                            value: "{fields.sub_category}",
                            oninput: move |evt| form.write().sub_category = evt.value(),
                        }
                    }
                    div {
                        label { class: "label", "Brand" }
                        input {
                            class: "input input-bordered w-full",
                            value: "{fields.brand}",
                            oninput: move |evt| form.write().brand = evt.value(),
                        }
                    }
                    div {
                        label { class: "label", "Model" }
                        input {
                            class: "input input-bordered w-full",
                            value: "{fields.model}",
                            oninput: move |evt| form.write().model = evt.value(),
                        }
                    }
                    div {
                        label { class: "label", "Price Per Day *" }
                        input {
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            class: "input input-bordered w-full",
                            value: "{fields.price_per_day}",
                            oninput: move |evt| form.write().price_per_day = evt.value(),
                        }
                        if let Some(message) = messages.get("price_per_day") {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label", "Condition" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{fields.condition}",
                            onchange: move |evt| form.write().condition = evt.value(),
                            for condition in CONDITIONS {
                                option { value: "{condition}", "{condition}" }
                            }
                        }
                    }
                    div {
                        label { class: "label", "Location" }
                        input {
                            class: "input input-bordered w-full",
                            value: "{fields.location}",
                            oninput: move |evt| form.write().location = evt.value(),
                        }
                    }
                    div {
                        label { class: "label cursor-pointer justify-start gap-2",
                            input {
                                r#type: "checkbox",
                                class: "toggle toggle-success",
                                checked: fields.available,
                                onchange: move |evt| form.write().available = evt.checked(),
                            }
                            "Available for rent"
                        }
                    }
                    div { class: "md:col-span-2",
                        label { class: "label", "Images" }
                        div { class: "flex gap-2",
                            input {
                                class: "input input-bordered flex-1",
                                placeholder: "Image URL",
                                value: "{new_image_url}",
                                oninput: move |evt| new_image_url.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-outline",
                                onclick: move |_| {
                                    form.write().add_image(&new_image_url.read());
                                    new_image_url.set(String::new());
                                },
                                Icon { width: 16, height: 16, icon: FaPlus }
                            }
                        }
                        ul { class: "mt-2 flex flex-col gap-1",
                            for (index, url) in fields.images.iter().enumerate() {
                                li { class: "flex items-center gap-2",
                                    p { class: "flex-1 truncate text-sm", "{url}" }
                                    button {
                                        r#type: "button",
                                        class: "btn btn-ghost btn-xs text-error",
                                        onclick: move |_| form.write().remove_image(index),
                                        Icon { width: 14, height: 14, icon: FaXmark }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        if item.is_some() { "Save Changes" } else { "Add Item" }
                    }
                }
            }
        }
    )
}
