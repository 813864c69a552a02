//! Tests for the page filter predicates.

use chrono::{TimeZone, Utc};

use crate::client::controller::filter::{
    category_options, contains_ci, ItemFilter, ReviewFilter, UserFilter,
};
use crate::model::{
    item::ItemDto,
    review::ReviewDto,
    user::{AuthType, KycStatus, UserDto, UserRole, UserStatus},
};

fn item(id: &str, title: &str, category: &str, available: bool) -> ItemDto {
    ItemDto {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        sub_category: None,
        brand: None,
        model: None,
        price_per_day: 10.0,
        condition: "Good".to_string(),
        images: Vec::new(),
        available,
        location: None,
        owner_id: "1".to_string(),
    }
}

fn seeded_items() -> Vec<ItemDto> {
    vec![
        item("1", "MacBook Pro 16\"", "Electronics", true),
        item("2", "Mountain Bike", "Sports", true),
        item("3", "DSLR Camera", "Electronics", false),
    ]
}

fn user(id: &str, name: &str, email: &str, status: UserStatus) -> UserDto {
    UserDto {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        mobile_number: None,
        status,
        role: UserRole::User,
        kyc_status: KycStatus::Verified,
        auth_type: AuthType::Email,
        address: None,
        profile_image: None,
        identity_documents: Vec::new(),
    }
}

fn review(id: &str, item_title: &str, user_name: &str, rating: u8) -> ReviewDto {
    ReviewDto {
        id: id.to_string(),
        item_id: "1".to_string(),
        user_id: "1".to_string(),
        rating,
        comment: None,
        created_at: Utc.with_ymd_and_hms(2023, 5, 15, 10, 30, 0).unwrap(),
        item_title: item_title.to_string(),
        user_name: user_name.to_string(),
    }
}

/// Tests case-insensitive substring matching.
///
/// Verifies that searching "mac" matches an item titled "MacBook Pro 16\"".
#[test]
fn search_is_case_insensitive_substring() {
    assert!(contains_ci("MacBook Pro 16\"", "mac"));
    assert!(contains_ci("MacBook Pro 16\"", "BOOK"));
    assert!(!contains_ci("Mountain Bike", "mac"));
}

/// Tests that an empty search term matches everything.
#[test]
fn empty_search_matches_all() {
    let filter = ItemFilter::default();
    assert_eq!(filter.apply(&seeded_items()).len(), 3);
}

/// Tests the 3-item category scenario.
///
/// Expected: filtering for "Electronics" returns exactly the MacBook and
/// the DSLR, excluding the Mountain Bike.
#[test]
fn category_filter_returns_the_two_electronics_items() {
    let filter = ItemFilter {
        category: Some("Electronics".to_string()),
        ..Default::default()
    };

    let visible = filter.apply(&seeded_items());

    let titles: Vec<&str> = visible.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["MacBook Pro 16\"", "DSLR Camera"]);
}

/// Tests that search and equality filters are AND-combined.
#[test]
fn filters_are_and_combined() {
    let filter = ItemFilter {
        search: "camera".to_string(),
        category: Some("Electronics".to_string()),
        available: Some(true),
    };

    // The DSLR matches search + category but is unavailable.
    assert!(filter.apply(&seeded_items()).is_empty());
}

/// Tests filter idempotence.
///
/// Verifies that applying the same predicate twice yields the same derived
/// list as applying it once.
#[test]
fn filtering_is_idempotent() {
    let filter = ItemFilter {
        search: "a".to_string(),
        category: Some("Electronics".to_string()),
        available: None,
    };

    let once = filter.apply(&seeded_items());
    let twice = filter.apply(&once);

    assert_eq!(once, twice);
}

/// Tests the availability filter on its own.
#[test]
fn availability_filter_partitions_items() {
    let available = ItemFilter {
        available: Some(true),
        ..Default::default()
    };
    let unavailable = ItemFilter {
        available: Some(false),
        ..Default::default()
    };

    assert_eq!(available.apply(&seeded_items()).len(), 2);
    assert_eq!(unavailable.apply(&seeded_items()).len(), 1);
}

/// Tests the distinct-category helper.
///
/// Expected: first-seen order with no duplicates.
#[test]
fn category_options_are_distinct_in_first_seen_order() {
    assert_eq!(
        category_options(&seeded_items()),
        vec!["Electronics".to_string(), "Sports".to_string()]
    );
}

/// Tests user search over name and email combined with the status filter.
#[test]
fn user_filter_matches_name_or_email() {
    let users = vec![
        user("1", "John Doe", "john@example.com", UserStatus::Active),
        user("2", "Jane Smith", "jane@example.com", UserStatus::Active),
        user("3", "Bob Johnson", "bob@example.com", UserStatus::Inactive),
    ];

    let by_email = UserFilter {
        search: "JANE@".to_string(),
        status: None,
    };
    assert_eq!(by_email.apply(&users).len(), 1);

    // "john" appears in John Doe's name and Bob Johnson's name.
    let by_name = UserFilter {
        search: "john".to_string(),
        status: Some(UserStatus::Active),
    };
    let visible = by_name.apply(&users);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "John Doe");
}

/// Tests review search over the denormalized display fields and the
/// rating equality filter.
#[test]
fn review_filter_matches_display_fields_and_rating() {
    let reviews = vec![
        review("1", "MacBook Pro 16\"", "John Doe", 5),
        review("2", "Mountain Bike", "Jane Smith", 4),
        review("3", "DSLR Camera", "Bob Johnson", 3),
    ];

    let by_user = ReviewFilter {
        search: "jane".to_string(),
        rating: None,
    };
    assert_eq!(by_user.apply(&reviews).len(), 1);

    let by_rating = ReviewFilter {
        search: String::new(),
        rating: Some(5),
    };
    let visible = by_rating.apply(&reviews);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].item_title, "MacBook Pro 16\"");
}
