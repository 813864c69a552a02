use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::Modal;
use crate::client::data::DataHandle;
use crate::client::form::{ErrorMap, ReviewForm};
use crate::model::review::{ReviewDto, ReviewPayload};

/// Lightweight option entry for the user/item dropdowns.
#[derive(Clone, Debug, PartialEq)]
struct SelectOption {
    id: String,
    label: String,
}

#[component]
pub fn ReviewFormModal(
    review: Option<ReviewDto>,
    on_save: EventHandler<ReviewPayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let data = use_context::<DataHandle>();
    let title = if review.is_some() { "Edit Review" } else { "Add Review" };
    let seeded = review.clone();
    let mut form = use_signal(move || match &seeded {
        Some(review) => ReviewForm::edit(review),
        None => ReviewForm::create(),
    });
    let mut errors = use_signal(ErrorMap::new);
    let mut user_options = use_signal(Vec::<SelectOption>::new);
    let mut item_options = use_signal(Vec::<SelectOption>::new);

    // The dropdowns need the user and item collections regardless of which
    // page hosts this modal.
    use_future(move || {
        let data = data.clone();
        async move {
            match data.fetch_users().await {
                Ok(users) => user_options.set(
                    users
                        .into_iter()
                        .map(|user| SelectOption {
                            id: user.id,
                            label: user.name,
                        })
                        .collect(),
                ),
                Err(err) => tracing::error!("failed to load users for review form: {err}"),
            }
            match data.fetch_items().await {
                Ok(items) => item_options.set(
                    items
                        .into_iter()
                        .map(|item| SelectOption {
                            id: item.id,
                            label: item.title,
                        })
                        .collect(),
                ),
                Err(err) => tracing::error!("failed to load items for review form: {err}"),
            }
        }
    });

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
                div { class: "flex flex-col gap-4",
                    div {
                        label { class: "label", "User *" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{fields.user_id}",
                            onchange: move |evt| form.write().user_id = evt.value(),
                            option { value: "", "Select a user" }
                            for user in user_options.read().iter() {
                                option { value: "{user.id}", "{user.label}" }
                            }
                        }
                        if let Some(message) = messages.get("user_id") {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label", "Item *" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{fields.item_id}",
                            onchange: move |evt| form.write().item_id = evt.value(),
                            option { value: "", "Select an item" }
                            for item in item_options.read().iter() {
                                option { value: "{item.id}", "{item.label}" }
                            }
                        }
                        if let Some(message) = messages.get("item_id") {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label", "Rating *" }
                        div { class: "flex gap-1",
                            for value in 1..=5u8 {
                                button {
                                    r#type: "button",
                                    class: if value <= fields.rating { "btn btn-ghost btn-sm text-warning" } else { "btn btn-ghost btn-sm opacity-40" },
                                    onclick: move |_| form.write().rating = value,
                                    Icon { width: 18, height: 18, icon: FaStar }
                                }
                            }
                        }
                        if let Some(message) = messages.get("rating") {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label", "Comment" }
                        textarea {
                            class: "textarea textarea-bordered w-full",
                            rows: 3,
                            value: "{fields.comment}",
                            oninput: move |evt| form.write().comment = evt.value(),
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
                        if review.is_some() { "Save Changes" } else { "Add Review" }
                    }
                }
            }
        }
    )
}
