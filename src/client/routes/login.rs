use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaLock;
use dioxus_free_icons::Icon;

use crate::client::{
    data::DataHandle,
    router::Route,
    store::session::{self, SessionState},
};

#[component]
pub fn Login() -> Element {
    let data = use_context::<DataHandle>();
    let mut session = use_context::<Signal<SessionState>>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let data = data.clone();
        loading.set(true);
        let submitted_email = email.peek().clone();
        let submitted_password = password.peek().clone();
        spawn(async move {
            let result = data.login(&submitted_email, &submitted_password).await;
            loading.set(false);
            match result {
                Ok(auth) => {
                    session::persist_token(&auth.token);
                    session.write().begin(auth.identity, auth.token);
                    navigator().push(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx!(
        Title { "Sign In | Rently Admin" }
        Meta {
            name: "description",
            content: "Administrative dashboard for the Rently rental marketplace."
        }
        div { class: "min-h-screen flex items-center justify-center bg-base-200 p-4",
            div { class: "w-full max-w-md",
                div { class: "text-center mb-10",
                    h1 { class: "text-3xl font-bold text-primary mb-2", "Rently Admin" }
                    p { class: "opacity-70", "Sign in to access your dashboard" }
                }
                div { class: "card bg-base-100 shadow-lg p-8",
                    if let Some(message) = error.read().clone() {
                        div { class: "alert alert-error mb-6",
                            p { "{message}" }
                        }
                    }
                    form {
                        onsubmit: submit,
                        div { class: "mb-6",
                            label { class: "label", "Email Address" }
                            input {
                                r#type: "email",
                                class: "input input-bordered w-full",
                                placeholder: "admin@example.com",
                                value: "{email}",
                                oninput: move |evt| {
                                    email.set(evt.value());
                                    // Clear the banner once the user retypes.
                                    error.set(None);
                                },
                            }
                        }
                        div { class: "mb-6",
                            label { class: "label", "Password" }
                            input {
                                r#type: "password",
                                class: "input input-bordered w-full",
                                value: "{password}",
                                oninput: move |evt| {
                                    password.set(evt.value());
                                    error.set(None);
                                },
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary w-full flex gap-2",
                            disabled: loading(),
                            if loading() {
                                span { class: "loading loading-spinner loading-sm" }
                                p { "Signing in..." }
                            } else {
                                Icon { width: 18, height: 18, icon: FaLock }
                                p { "Sign in" }
                            }
                        }
                    }
                }
                div { class: "mt-8 text-center text-sm opacity-70",
                    p { "Don't have an account? Contact your administrator" }
                }
            }
        }
    )
}
