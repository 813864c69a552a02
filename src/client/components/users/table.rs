use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPencil, FaTrash};
use dioxus_free_icons::Icon;

use crate::model::user::{UserDto, UserStatus};

#[component]
pub fn UserTable(
    users: Vec<UserDto>,
    on_edit: EventHandler<UserDto>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx!(
        div { class: "card overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Mobile" }
                        th { "Status" }
                        th { "Role" }
                        th { "KYC" }
                        th { "Auth" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if users.is_empty() {
                        tr {
                            td { colspan: 8, class: "text-center opacity-70", "No users found" }
                        }
                    }
                    for user in users.iter() {
                        UserRow {
                            key: "{user.id}",
                            user: user.clone(),
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn UserRow(
    user: UserDto,
    on_edit: EventHandler<UserDto>,
    on_delete: EventHandler<String>,
) -> Element {
    let status_class = match user.status {
        UserStatus::Active => "badge badge-success",
        UserStatus::Inactive => "badge badge-error",
    };
    let edit_user = user.clone();
    let delete_id = user.id.clone();

    rsx!(
        tr {
            td {
                div { class: "flex gap-2 items-center",
                    if let Some(image) = &user.profile_image {
                        div { class: "avatar",
                            div { class: "w-10 h-10 rounded-full",
                                img { src: "{image}", alt: "{user.name}" }
                            }
                        }
                    }
                    p { "{user.name}" }
                }
            }
            td { "{user.email}" }
            td { {user.mobile_number.clone().unwrap_or_else(|| "—".to_string())} }
            td {
                span { class: "{status_class}", "{user.status}" }
            }
            td { "{user.role}" }
            td { "{user.kyc_status}" }
            td { "{user.auth_type}" }
            td {
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| on_edit.call(edit_user.clone()),
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
