use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::{
    router::Route,
    store::session::{self, SessionState},
};

/// Layout for every protected page: the route guard plus the sidebar.
///
/// The guard is a synchronous predicate over the session store; an
/// unauthenticated session is redirected to the login entry point before
/// any page content renders.
#[component]
pub fn Shell() -> Element {
    let session = use_context::<Signal<SessionState>>();

    if !session.read().is_authenticated() {
        navigator().replace(Route::Login {});
        return rsx!();
    }

    rsx!(
        div { class: "flex min-h-screen",
            Sidebar {}
            main { class: "flex-1 bg-base-100",
                Outlet::<Route> {}
            }
        }
    )
}

#[component]
fn Sidebar() -> Element {
    let mut session = use_context::<Signal<SessionState>>();

    let display_name = session
        .read()
        .current_identity()
        .map(|identity| identity.display_name.clone())
        .unwrap_or_default();

    rsx!(
        aside { class: "w-64 bg-base-200 flex flex-col",
            div { class: "p-4 border-b border-base-300",
                p { class: "text-xl font-bold", "Rently Admin" }
                p { class: "text-sm opacity-70", "{display_name}" }
            }
            nav { class: "flex-1 p-2",
                ul { class: "menu w-full",
                    li {
                        Link { to: Route::Dashboard {}, "Dashboard" }
                    }
                    li {
                        Link { to: Route::Users {}, "Users" }
                    }
                    li {
                        Link { to: Route::Items {}, "Items" }
                    }
                    li {
                        Link { to: Route::Reviews {}, "Reviews" }
                    }
                    li {
                        Link { to: Route::SellerRequests {}, "Seller Requests" }
                    }
                }
            }
            div { class: "p-4 border-t border-base-300",
                button {
                    class: "btn btn-outline w-full flex gap-2",
                    onclick: move |_| {
                        session::clear_token();
                        session.write().clear();
                        navigator().push(Route::Login {});
                    },
                    Icon { width: 20, height: 20, icon: FaRightFromBracket }
                    p { "Logout" }
                }
            }
        }
    )
}
