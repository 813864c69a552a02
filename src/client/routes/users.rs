use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::page::Loading;
use crate::client::components::users::{UserFormModal, UserTable};
use crate::client::components::{ConfirmDialog, ErrorBanner, Page};
use crate::client::controller::filter::UserFilter;
use crate::client::controller::list::ListState;
use crate::client::data::DataHandle;
use crate::model::user::{UserDto, UserPayload, UserStatus};

#[component]
pub fn Users() -> Element {
    let data = use_context::<DataHandle>();
    let mut list = use_signal(ListState::<UserDto>::new);
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<UserStatus>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<UserDto>);
    let mut pending_delete = use_signal(|| None::<String>);

    {
        let data = data.clone();
        use_future(move || {
            let data = data.clone();
            async move {
                match data.fetch_users().await {
                    Ok(users) => list.write().set_loaded(users),
                    Err(err) => {
                        tracing::error!("failed to load users: {err}");
                        list.write().set_failed(err.to_string());
                    }
                }
            }
        });
    }

    let filter = UserFilter {
        search: search.read().clone(),
        status: *status_filter.read(),
    };
    let visible = filter.apply(list.read().entries());
    let load_error = list.read().error().map(str::to_string);

    let on_save = {
        let data = data.clone();
        move |payload: UserPayload| {
            let data = data.clone();
            let current = editing.peek().clone();
            show_form.set(false);
            editing.set(None);
            spawn(async move {
                let result = match &current {
                    Some(user) => data.update_user(&user.id, payload).await,
                    None => data.create_user(payload).await,
                };
                match result {
                    Ok(user) => list.write().upsert(user),
                    Err(err) => tracing::error!("failed to save user: {err}"),
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
                match data.remove_user(&id).await {
                    Ok(()) => list.write().remove(&id),
                    Err(err) => tracing::error!("failed to delete user: {err}"),
                }
            });
        }
    };

    rsx!(
        Title { "Users | Rently Admin" }
        Page {
            div { class: "flex justify-between items-center mb-6",
                h1 { class: "text-2xl font-bold", "Users Management" }
                button {
                    class: "btn btn-primary flex gap-1",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    Icon { width: 16, height: 16, icon: FaPlus }
                    p { "Add User" }
                }
            }

            div { class: "card mb-6 p-4",
                div { class: "flex flex-col md:flex-row gap-4",
                    label { class: "input input-bordered flex items-center gap-2 flex-1",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                        input {
                            class: "grow",
                            placeholder: "Search users...",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                    select {
                        class: "select select-bordered w-full md:w-48",
                        onchange: move |evt| status_filter.set(UserStatus::parse(&evt.value())),
                        option { value: "ALL", "All Statuses" }
                        for status in UserStatus::ALL {
                            option { value: "{status}", "{status}" }
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
                UserTable {
                    users: visible,
                    on_edit: move |user| {
                        editing.set(Some(user));
                        show_form.set(true);
                    },
                    on_delete: move |id| pending_delete.set(Some(id)),
                }
            }

            if show_form() {
                UserFormModal {
                    user: editing.read().clone(),
                    on_save,
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                }
            }

            if pending_delete.read().is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this user?",
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    )
}
