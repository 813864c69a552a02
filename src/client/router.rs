use dioxus::prelude::*;

use crate::client::{
    components::Shell,
    routes::{Dashboard, Items, Login, NotFound, Reviews, SellerRequests, Users},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(Shell)]

    #[route("/")]
    Dashboard {},

    #[route("/users")]
    Users {},

    #[route("/items")]
    Items {},

    #[route("/reviews")]
    Reviews {},

    #[route("/seller-requests")]
    SellerRequests {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
