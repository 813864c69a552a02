pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod data;
pub mod form;
pub mod router;
pub mod routes;
pub mod store;

pub use app::App;
