//! Tests for the generic list state behind every entity page.

use crate::client::controller::list::ListState;
use crate::model::user::{AuthType, KycStatus, UserDto, UserRole, UserStatus};

fn user(id: &str, name: &str) -> UserDto {
    UserDto {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        mobile_number: None,
        status: UserStatus::Active,
        role: UserRole::User,
        kyc_status: KycStatus::NotSubmitted,
        auth_type: AuthType::Email,
        address: None,
        profile_image: None,
        identity_documents: Vec::new(),
    }
}

/// Tests the initial state before the first fetch resolves.
///
/// Expected: loading with an empty collection and no error.
#[test]
fn starts_loading_and_empty() {
    let list = ListState::<UserDto>::new();

    assert!(list.is_loading());
    assert!(list.entries().is_empty());
    assert!(list.error().is_none());
}

/// Tests that a successful fetch replaces the collection and clears the
/// loading flag.
#[test]
fn set_loaded_replaces_entries() {
    let mut list = ListState::new();

    list.set_loaded(vec![user("1", "John"), user("2", "Jane")]);

    assert!(!list.is_loading());
    assert_eq!(list.entries().len(), 2);
}

/// Tests the failure path.
///
/// Verifies that a fetch failure clears the loading flag, records the
/// message, and leaves the collection as-is.
#[test]
fn set_failed_keeps_entries() {
    let mut list = ListState::new();
    list.set_loaded(vec![user("1", "John")]);

    list.set_failed("Request failed with status 500: boom".to_string());

    assert!(!list.is_loading());
    assert_eq!(list.entries().len(), 1);
    assert!(list.error().is_some());
}

/// Tests upsert reconciliation for an existing record.
#[test]
fn upsert_replaces_matching_id() {
    let mut list = ListState::new();
    list.set_loaded(vec![user("1", "John"), user("2", "Jane")]);

    list.upsert(user("2", "Jane Updated"));

    assert_eq!(list.entries().len(), 2);
    assert_eq!(list.get("2").map(|u| u.name.as_str()), Some("Jane Updated"));
}

/// Tests upsert reconciliation for a newly created record.
#[test]
fn upsert_appends_new_id() {
    let mut list = ListState::new();
    list.set_loaded(vec![user("1", "John")]);

    list.upsert(user("100", "Alice"));

    assert_eq!(list.entries().len(), 2);
    assert!(list.get("100").is_some());
}

/// Tests removal by id.
///
/// Expected: the matching entry disappears; a second removal of the same
/// id is a no-op.
#[test]
fn remove_drops_matching_entry() {
    let mut list = ListState::new();
    list.set_loaded(vec![user("1", "John"), user("2", "Jane")]);

    list.remove("1");
    assert_eq!(list.entries().len(), 1);
    assert!(list.get("1").is_none());

    list.remove("1");
    assert_eq!(list.entries().len(), 1);
}
