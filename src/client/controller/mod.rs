//! The entity-list controller layer.
//!
//! Every entity page follows the same fetch, filter, render, mutate shape:
//! a [`list::ListState`] holds the fetched collection (the single
//! in-memory source of truth for that view), a pure filter from
//! [`filter`] derives the visible rows on every keystroke, and mutations
//! reconcile the list from whatever the data source returned.

pub mod filter;
pub mod list;
pub mod stats;

#[cfg(test)]
mod tests;
