//! Tests for the entity-list controller layer.

mod filter;
mod list_state;
mod request_stats;
