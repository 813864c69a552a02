//! Tests for the seller-request and dashboard stat aggregates.

use chrono::{TimeZone, Utc};

use crate::client::controller::stats::{DashboardStats, RequestStats};
use crate::model::{
    item::ItemDto,
    review::ReviewDto,
    seller::{SellerDecision, SellerRequestDto, SellerStatus},
    user::{AuthType, KycStatus, UserDto, UserRole, UserStatus},
};

fn request(id: &str, status: SellerStatus) -> SellerRequestDto {
    SellerRequestDto {
        id: id.to_string(),
        user_id: id.to_string(),
        name: "Requester".to_string(),
        email: "requester@example.com".to_string(),
        status,
        documents: Vec::new(),
        submitted_at: Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap(),
    }
}

/// Tests deriving the tally from a fetched list.
///
/// Expected: one bucket per status plus the overall total.
#[test]
fn stats_are_derived_from_the_fetched_list() {
    let requests = vec![
        request("1", SellerStatus::Pending),
        request("2", SellerStatus::Pending),
        request("3", SellerStatus::Approved),
        request("4", SellerStatus::Rejected),
    ];

    let stats = RequestStats::from_requests(&requests);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.approved, 1);
    assert_eq!(stats.rejected, 1);
}

/// Tests the approve transition.
///
/// Verifies that approving a pending request decrements pending by one and
/// increments approved by one, leaving the total untouched.
#[test]
fn approving_moves_pending_into_approved() {
    let mut stats = RequestStats {
        total: 3,
        approved: 1,
        rejected: 0,
        pending: 2,
    };

    stats.apply_decision(SellerStatus::Pending, SellerDecision::Approve);

    assert_eq!(stats.pending, 1);
    assert_eq!(stats.approved, 2);
    assert_eq!(stats.total, 3);
}

/// Tests the reject transition.
#[test]
fn rejecting_moves_pending_into_rejected() {
    let mut stats = RequestStats {
        total: 2,
        approved: 0,
        rejected: 0,
        pending: 2,
    };

    stats.apply_decision(SellerStatus::Pending, SellerDecision::Reject);

    assert_eq!(stats.pending, 1);
    assert_eq!(stats.rejected, 1);
}

/// Tests the terminal guard.
///
/// Expected: deciding an already-approved or already-rejected request
/// leaves every counter unchanged.
#[test]
fn deciding_a_terminal_request_is_a_no_op() {
    let before = RequestStats {
        total: 3,
        approved: 2,
        rejected: 1,
        pending: 0,
    };

    let mut stats = before;
    stats.apply_decision(SellerStatus::Approved, SellerDecision::Reject);
    assert_eq!(stats, before);

    stats.apply_decision(SellerStatus::Rejected, SellerDecision::Approve);
    assert_eq!(stats, before);
}

/// Tests the underflow clamp on drifted counters.
#[test]
fn drifted_pending_counter_clamps_at_zero() {
    let mut stats = RequestStats {
        total: 1,
        approved: 0,
        rejected: 0,
        pending: 0,
    };

    stats.apply_decision(SellerStatus::Pending, SellerDecision::Approve);

    assert_eq!(stats.pending, 0);
    assert_eq!(stats.approved, 1);
}

/// Tests the dashboard aggregates, including the average rating.
#[test]
fn dashboard_stats_are_computed_from_collections() {
    let users = vec![
        seeded_user("1", UserStatus::Active),
        seeded_user("2", UserStatus::Active),
        seeded_user("3", UserStatus::Inactive),
    ];
    let items = vec![seeded_item("1", true), seeded_item("2", false)];
    let reviews = vec![seeded_review("1", 5), seeded_review("2", 4)];

    let stats = DashboardStats::from_collections(&users, &items, &reviews);

    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.active_users, 2);
    assert_eq!(stats.inactive_users, 1);
    assert_eq!(stats.total_items, 2);
    assert_eq!(stats.available_items, 1);
    assert_eq!(stats.unavailable_items, 1);
    assert_eq!(stats.total_reviews, 2);
    assert!((stats.average_rating - 4.5).abs() < f64::EPSILON);
}

/// Tests that an empty review collection reports a zero average instead of
/// dividing by zero.
#[test]
fn empty_reviews_have_zero_average_rating() {
    let stats = DashboardStats::from_collections(&[], &[], &[]);
    assert_eq!(stats.average_rating, 0.0);
}

fn seeded_user(id: &str, status: UserStatus) -> UserDto {
    UserDto {
        id: id.to_string(),
        name: "User".to_string(),
        email: format!("{id}@example.com"),
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

fn seeded_item(id: &str, available: bool) -> ItemDto {
    ItemDto {
        id: id.to_string(),
        title: "Item".to_string(),
        description: String::new(),
        category: "Electronics".to_string(),
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

fn seeded_review(id: &str, rating: u8) -> ReviewDto {
    ReviewDto {
        id: id.to_string(),
        item_id: "1".to_string(),
        user_id: "1".to_string(),
        rating,
        comment: None,
        created_at: Utc.with_ymd_and_hms(2023, 5, 15, 10, 30, 0).unwrap(),
        item_title: "Item".to_string(),
        user_name: "User".to_string(),
    }
}
