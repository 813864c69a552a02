use dioxus::prelude::*;

use crate::client::components::Modal;
use crate::client::form::{ErrorMap, UserForm};
use crate::model::user::{AuthType, KycStatus, UserDto, UserPayload, UserRole, UserStatus};

#[component]
pub fn UserFormModal(
    user: Option<UserDto>,
    on_save: EventHandler<UserPayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if user.is_some() { "Edit User" } else { "Add User" };
    let seeded = user.clone();
    let mut form = use_signal(move || match &seeded {
        Some(user) => UserForm::edit(user),
        None => UserForm::create(),
    });
    let mut errors = use_signal(ErrorMap::new);

    let fields = form.read().clone();
    let messages = errors.read().clone();
    let show_password = !fields.is_editing() && fields.auth_type == AuthType::Email;

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
                    div {
                        label { class: "label", "Name *" }
                        input {
                            class: "input input-bordered w-full",
                            value: "{fields.name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                        if let Some(message) = messages.get("name") {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label", "Email *" }
                        input {
                            r#type: "email",
                            class: "input input-bordered w-full",
                            value: "{fields.email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                        if let Some(message) = messages.get("email") {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label", "Mobile Number" }
                        input {
                            class: "input input-bordered w-full",
                            value: "{fields.mobile_number}",
                            oninput: move |evt| form.write().mobile_number = evt.value(),
                        }
                        if let Some(message) = messages.get("mobile_number") {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label", "Status" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{fields.status}",
                            onchange: move |evt| {
                                if let Some(status) = UserStatus::parse(&evt.value()) {
                                    form.write().status = status;
                                }
                            },
                            for status in UserStatus::ALL {
                                option { value: "{status}", "{status}" }
                            }
                        }
                    }
                    div {
                        label { class: "label", "Role" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{fields.role}",
                            onchange: move |evt| {
                                if let Some(role) = UserRole::parse(&evt.value()) {
                                    form.write().role = role;
                                }
                            },
                            for role in UserRole::ALL {
                                option { value: "{role}", "{role}" }
                            }
                        }
                    }
                    div {
                        label { class: "label", "KYC Status" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{fields.kyc_status}",
                            onchange: move |evt| {
                                if let Some(status) = KycStatus::parse(&evt.value()) {
                                    form.write().kyc_status = status;
                                }
                            },
                            for status in KycStatus::ALL {
                                option { value: "{status}", "{status}" }
                            }
                        }
                    }
                    div {
                        label { class: "label", "Auth Type" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{fields.auth_type}",
                            onchange: move |evt| {
                                if let Some(auth) = AuthType::parse(&evt.value()) {
                                    form.write().auth_type = auth;
                                }
                            },
                            for auth in AuthType::ALL {
                                option { value: "{auth}", "{auth}" }
                            }
                        }
                    }
                    if show_password {
                        div {
                            label { class: "label", "Password *" }
                            input {
                                r#type: "password",
                                class: "input input-bordered w-full",
                                value: "{fields.password}",
                                oninput: move |evt| form.write().password = evt.value(),
                            }
                            if let Some(message) = messages.get("password") {
                                p { class: "text-error text-sm mt-1", "{message}" }
                            }
                        }
                    }
                    div { class: "md:col-span-2",
                        label { class: "label", "Address" }
                        input {
                            class: "input input-bordered w-full",
                            value: "{fields.address}",
                            oninput: move |evt| form.write().address = evt.value(),
                        }
                    }
                    div { class: "md:col-span-2",
                        label { class: "label", "Profile Image URL" }
                        input {
                            class: "input input-bordered w-full",
                            value: "{fields.profile_image}",
                            oninput: move |evt| form.write().profile_image = evt.value(),
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
                        if user.is_some() { "Save Changes" } else { "Add User" }
                    }
                }
            }
        }
    )
}
