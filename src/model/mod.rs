//! Shared data transfer objects for the admin dashboard.
//!
//! Every type here is a plain serializable record whose wire shape matches
//! the legacy marketplace backend (`_id` identifiers, camelCase fields,
//! SCREAMING enum values). Entities are never persisted on the client
//! beyond the in-memory page state that holds them.

pub mod api;
pub mod auth;
pub mod item;
pub mod review;
pub mod seller;
pub mod user;
