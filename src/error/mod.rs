//! Error types for the Rently admin dashboard.
//!
//! Two failure domains exist on the client: authentication (login and
//! token validation) and data fetching (any request made through the
//! [`DataSource`](crate::client::data::DataSource) interface). Field-level
//! form validation is not an error type; it is reported through an
//! [`ErrorMap`](crate::client::form::ErrorMap) and recovered inline.

pub mod auth;
pub mod fetch;

pub use auth::AuthError;
pub use fetch::FetchError;
