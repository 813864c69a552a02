//! In-memory data source with canned marketplace data.
//!
//! Stands in for the backend during local development and in tests: fixed
//! seed collections, a simulated request latency in the browser, and a
//! monotonically increasing id counter for creates. Counter ids are only
//! unique within this process, not globally; the real backend assigns
//! authoritative ids.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::error::{AuthError, FetchError};
use crate::model::{
    auth::{AuthSession, Identity},
    item::{ItemDto, ItemPayload},
    review::{ReviewDto, ReviewPayload},
    seller::{DocumentDto, SellerDecision, SellerRequestDto, SellerStatus},
    user::{AuthType, KycStatus, UserDto, UserPayload, UserRole, UserStatus},
};

use super::DataSource;

/// Placeholder credential pair standing in for a real backend check.
/// Never carry a hard-coded pair against a live deployment.
const MOCK_ADMIN_EMAIL: &str = "admin@example.com";
const MOCK_ADMIN_SECRET: &str = "password";
const MOCK_TOKEN: &str = "mock-session-token";

/// Fixed delay so loading states behave like they would against a real
/// backend. Skipped off-wasm so unit tests run instantly.
#[cfg(target_arch = "wasm32")]
const MOCK_LATENCY_MS: u32 = 1000;

async fn simulate_latency() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(MOCK_LATENCY_MS).await;
}

pub struct MockDataSource {
    users: RefCell<Vec<UserDto>>,
    items: RefCell<Vec<ItemDto>>,
    reviews: RefCell<Vec<ReviewDto>>,
    requests: RefCell<Vec<SellerRequestDto>>,
    next_id: Cell<u64>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self {
            users: RefCell::new(seed_users()),
            items: RefCell::new(seed_items()),
            reviews: RefCell::new(seed_reviews()),
            requests: RefCell::new(seed_requests()),
            next_id: Cell::new(100),
        }
    }

    /// Client-side id substitute for mock creates.
    fn assign_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id.to_string()
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl DataSource for MockDataSource {
    async fn login(&self, email: &str, secret: &str) -> Result<AuthSession, AuthError> {
        simulate_latency().await;

        if email == MOCK_ADMIN_EMAIL && secret == MOCK_ADMIN_SECRET {
            Ok(AuthSession {
                token: MOCK_TOKEN.to_string(),
                identity: admin_identity(),
            })
        } else {
            Err(AuthError::InvalidCredentials(
                "Invalid email or password".to_string(),
            ))
        }
    }

    async fn validate_token(&self, token: &str) -> Result<Identity, AuthError> {
        simulate_latency().await;

        if token == MOCK_TOKEN {
            Ok(admin_identity())
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    async fn fetch_users(&self) -> Result<Vec<UserDto>, FetchError> {
        simulate_latency().await;
        Ok(self.users.borrow().clone())
    }

    async fn create_user(&self, payload: UserPayload) -> Result<UserDto, FetchError> {
        simulate_latency().await;

        let user = UserDto {
            id: self.assign_id(),
            name: payload.name,
            email: payload.email,
            mobile_number: payload.mobile_number,
            status: payload.status,
            role: payload.role,
            kyc_status: payload.kyc_status,
            auth_type: payload.auth_type,
            address: payload.address,
            profile_image: payload.profile_image,
            identity_documents: Vec::new(),
        };
        self.users.borrow_mut().push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &str, payload: UserPayload) -> Result<UserDto, FetchError> {
        simulate_latency().await;

        let mut users = self.users.borrow_mut();
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| FetchError::NotFound(id.to_string()))?;

        user.name = payload.name;
        user.email = payload.email;
        user.mobile_number = payload.mobile_number;
        user.status = payload.status;
        user.role = payload.role;
        user.kyc_status = payload.kyc_status;
        user.auth_type = payload.auth_type;
        user.address = payload.address;
        user.profile_image = payload.profile_image;
        Ok(user.clone())
    }

    async fn remove_user(&self, id: &str) -> Result<(), FetchError> {
        simulate_latency().await;
        self.users.borrow_mut().retain(|user| user.id != id);
        Ok(())
    }

    async fn fetch_items(&self) -> Result<Vec<ItemDto>, FetchError> {
        simulate_latency().await;
        Ok(self.items.borrow().clone())
    }

    async fn create_item(&self, payload: ItemPayload) -> Result<ItemDto, FetchError> {
        simulate_latency().await;

        let item = ItemDto {
            id: self.assign_id(),
            title: payload.title,
            description: payload.description,
            category: payload.category,
            sub_category: payload.sub_category,
            brand: payload.brand,
            model: payload.model,
            price_per_day: payload.price_per_day,
            condition: payload.condition,
            images: payload.images,
            available: payload.available,
            location: payload.location,
            // The real backend stamps the acting staff user here.
            owner_id: "1".to_string(),
        };
        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: &str, payload: ItemPayload) -> Result<ItemDto, FetchError> {
        simulate_latency().await;

        let mut items = self.items.borrow_mut();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| FetchError::NotFound(id.to_string()))?;

        item.title = payload.title;
        item.description = payload.description;
        item.category = payload.category;
        item.sub_category = payload.sub_category;
        item.brand = payload.brand;
        item.model = payload.model;
        item.price_per_day = payload.price_per_day;
        item.condition = payload.condition;
        item.images = payload.images;
        item.available = payload.available;
        item.location = payload.location;
        Ok(item.clone())
    }

    async fn remove_item(&self, id: &str) -> Result<(), FetchError> {
        simulate_latency().await;
        self.items.borrow_mut().retain(|item| item.id != id);
        Ok(())
    }

    async fn set_item_availability(
        &self,
        id: &str,
        available: bool,
    ) -> Result<ItemDto, FetchError> {
        simulate_latency().await;

        let mut items = self.items.borrow_mut();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| FetchError::NotFound(id.to_string()))?;

        item.available = available;
        Ok(item.clone())
    }

    async fn fetch_reviews(&self) -> Result<Vec<ReviewDto>, FetchError> {
        simulate_latency().await;
        Ok(self.reviews.borrow().clone())
    }

    async fn create_review(&self, payload: ReviewPayload) -> Result<ReviewDto, FetchError> {
        simulate_latency().await;

        let item_title = self
            .items
            .borrow()
            .iter()
            .find(|item| item.id == payload.item_id)
            .map(|item| item.title.clone())
            .unwrap_or_default();
        let user_name = self
            .users
            .borrow()
            .iter()
            .find(|user| user.id == payload.user_id)
            .map(|user| user.name.clone())
            .unwrap_or_default();

        let review = ReviewDto {
            id: self.assign_id(),
            item_id: payload.item_id,
            user_id: payload.user_id,
            rating: payload.rating,
            comment: payload.comment,
            created_at: Utc::now(),
            item_title,
            user_name,
        };
        self.reviews.borrow_mut().push(review.clone());
        Ok(review)
    }

    async fn update_review(&self, id: &str, payload: ReviewPayload) -> Result<ReviewDto, FetchError> {
        simulate_latency().await;

        let mut reviews = self.reviews.borrow_mut();
        let review = reviews
            .iter_mut()
            .find(|review| review.id == id)
            .ok_or_else(|| FetchError::NotFound(id.to_string()))?;

        review.item_id = payload.item_id;
        review.user_id = payload.user_id;
        review.rating = payload.rating;
        review.comment = payload.comment;
        Ok(review.clone())
    }

    async fn remove_review(&self, id: &str) -> Result<(), FetchError> {
        simulate_latency().await;
        self.reviews.borrow_mut().retain(|review| review.id != id);
        Ok(())
    }

    async fn fetch_seller_requests(&self) -> Result<Vec<SellerRequestDto>, FetchError> {
        simulate_latency().await;
        Ok(self.requests.borrow().clone())
    }

    async fn review_seller_request(
        &self,
        id: &str,
        decision: SellerDecision,
    ) -> Result<SellerRequestDto, FetchError> {
        simulate_latency().await;

        let mut requests = self.requests.borrow_mut();
        let request = requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| FetchError::NotFound(id.to_string()))?;

        // Terminal requests never transition again.
        if !request.status.is_terminal() {
            request.status = decision.target_status();
        }
        Ok(request.clone())
    }
}

fn admin_identity() -> Identity {
    Identity {
        id: "1".to_string(),
        display_name: "Admin User".to_string(),
        email: MOCK_ADMIN_EMAIL.to_string(),
        role: "admin".to_string(),
    }
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn seed_users() -> Vec<UserDto> {
    vec![
        UserDto {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            mobile_number: Some("1234567890".to_string()),
            status: UserStatus::Active,
            role: UserRole::User,
            kyc_status: KycStatus::Verified,
            auth_type: AuthType::Email,
            address: Some("123 Main St, City".to_string()),
            profile_image: Some("/placeholder.svg?height=50&width=50".to_string()),
            identity_documents: Vec::new(),
        },
        UserDto {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            mobile_number: Some("9876543210".to_string()),
            status: UserStatus::Active,
            role: UserRole::Admin,
            kyc_status: KycStatus::Verified,
            auth_type: AuthType::Google,
            address: Some("456 Oak St, Town".to_string()),
            profile_image: Some("/placeholder.svg?height=50&width=50".to_string()),
            identity_documents: Vec::new(),
        },
        UserDto {
            id: "3".to_string(),
            name: "Bob Johnson".to_string(),
            email: "bob@example.com".to_string(),
            mobile_number: Some("5551234567".to_string()),
            status: UserStatus::Inactive,
            role: UserRole::User,
            kyc_status: KycStatus::Pending,
            auth_type: AuthType::Email,
            address: Some("789 Pine St, Village".to_string()),
            profile_image: Some("/placeholder.svg?height=50&width=50".to_string()),
            identity_documents: Vec::new(),
        },
    ]
}

fn seed_items() -> Vec<ItemDto> {
    vec![
        ItemDto {
            id: "1".to_string(),
            title: "MacBook Pro 16\"".to_string(),
            description: "Latest model with M1 Pro chip, 16GB RAM, 512GB SSD".to_string(),
            category: "Electronics".to_string(),
            sub_category: Some("Laptops".to_string()),
            brand: Some("Apple".to_string()),
            model: Some("MacBook Pro".to_string()),
            price_per_day: 50.0,
            condition: "Excellent".to_string(),
            images: vec!["/placeholder.svg?height=100&width=100".to_string()],
            available: true,
            location: Some("New York, NY".to_string()),
            owner_id: "1".to_string(),
        },
        ItemDto {
            id: "2".to_string(),
            title: "Mountain Bike".to_string(),
            description: "Professional mountain bike, perfect for trails".to_string(),
            category: "Sports".to_string(),
            sub_category: Some("Bikes".to_string()),
            brand: Some("Trek".to_string()),
            model: Some("X-Caliber 8".to_string()),
            price_per_day: 25.0,
            condition: "Good".to_string(),
            images: vec!["/placeholder.svg?height=100&width=100".to_string()],
            available: true,
            location: Some("Denver, CO".to_string()),
            owner_id: "2".to_string(),
        },
        ItemDto {
            id: "3".to_string(),
            title: "DSLR Camera".to_string(),
            description: "Professional camera with multiple lenses".to_string(),
            category: "Electronics".to_string(),
            sub_category: Some("Cameras".to_string()),
            brand: Some("Canon".to_string()),
            model: Some("EOS 5D Mark IV".to_string()),
            price_per_day: 35.0,
            condition: "Like New".to_string(),
            images: vec!["/placeholder.svg?height=100&width=100".to_string()],
            available: false,
            location: Some("Los Angeles, CA".to_string()),
            owner_id: "1".to_string(),
        },
    ]
}

fn seed_reviews() -> Vec<ReviewDto> {
    vec![
        ReviewDto {
            id: "1".to_string(),
            item_id: "1".to_string(),
            user_id: "1".to_string(),
            rating: 5,
            comment: Some(
                "Excellent laptop, worked perfectly for my needs. Would rent again!".to_string(),
            ),
            created_at: timestamp(2023, 5, 15, 10, 30),
            item_title: "MacBook Pro 16\"".to_string(),
            user_name: "John Doe".to_string(),
        },
        ReviewDto {
            id: "2".to_string(),
            item_id: "2".to_string(),
            user_id: "2".to_string(),
            rating: 4,
            comment: Some("Great bike, but had some minor issues with the gears.".to_string()),
            created_at: timestamp(2023, 5, 10, 14, 20),
            item_title: "Mountain Bike".to_string(),
            user_name: "Jane Smith".to_string(),
        },
        ReviewDto {
            id: "3".to_string(),
            item_id: "3".to_string(),
            user_id: "3".to_string(),
            rating: 3,
            comment: Some(
                "Camera was okay, but had some scratches that weren't mentioned in the description."
                    .to_string(),
            ),
            created_at: timestamp(2023, 5, 5, 9, 15),
            item_title: "DSLR Camera".to_string(),
            user_name: "Bob Johnson".to_string(),
        },
    ]
}

fn seed_requests() -> Vec<SellerRequestDto> {
    vec![
        SellerRequestDto {
            id: "1".to_string(),
            user_id: "3".to_string(),
            name: "Bob Johnson".to_string(),
            email: "bob@example.com".to_string(),
            status: SellerStatus::Pending,
            documents: vec![
                DocumentDto {
                    kind: "Aadhaar Card".to_string(),
                    url: "/placeholder.svg?height=300&width=200".to_string(),
                },
                DocumentDto {
                    kind: "PAN Card".to_string(),
                    url: "/placeholder.svg?height=300&width=200".to_string(),
                },
            ],
            submitted_at: timestamp(2023, 6, 2, 11, 45),
        },
        SellerRequestDto {
            id: "2".to_string(),
            user_id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            status: SellerStatus::Approved,
            documents: vec![DocumentDto {
                kind: "Aadhaar Card".to_string(),
                url: "/placeholder.svg?height=300&width=200".to_string(),
            }],
            submitted_at: timestamp(2023, 5, 20, 16, 10),
        },
        SellerRequestDto {
            id: "3".to_string(),
            user_id: "2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            status: SellerStatus::Rejected,
            documents: Vec::new(),
            submitted_at: timestamp(2023, 5, 18, 9, 5),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seller::SellerDecision;

    /// Tests the mock credential check.
    ///
    /// Verifies that exactly the placeholder pair succeeds and that the
    /// issued session carries a token and the admin identity.
    #[tokio::test]
    async fn login_accepts_only_the_mock_pair() {
        let data = MockDataSource::new();

        let session = data.login("admin@example.com", "password").await.unwrap();
        assert_eq!(session.token, MOCK_TOKEN);
        assert_eq!(session.identity.email, "admin@example.com");
    }

    /// Tests rejection of any other credential pair.
    ///
    /// Expected: `InvalidCredentials` with a non-empty message.
    #[tokio::test]
    async fn login_rejects_other_pairs() {
        let data = MockDataSource::new();

        let err = data
            .login("admin@example.com", "wrong")
            .await
            .expect_err("wrong secret must fail");

        match err {
            AuthError::InvalidCredentials(message) => assert!(!message.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Tests the token validation round-trip.
    ///
    /// Verifies that the issued token validates back to the same identity
    /// while any other token is rejected.
    #[tokio::test]
    async fn validate_token_round_trip() {
        let data = MockDataSource::new();

        let session = data.login("admin@example.com", "password").await.unwrap();
        let identity = data.validate_token(&session.token).await.unwrap();
        assert_eq!(identity, session.identity);

        let err = data.validate_token("stale-token").await.expect_err("stale");
        assert_eq!(err, AuthError::InvalidToken);
    }

    /// Tests that creates assign monotonically increasing ids and that the
    /// created record is visible to a subsequent fetch.
    #[tokio::test]
    async fn create_assigns_monotonic_ids() {
        let data = MockDataSource::new();
        let payload = ItemPayload {
            title: "Projector".to_string(),
            description: "1080p home projector".to_string(),
            category: "Electronics".to_string(),
            sub_category: None,
            brand: None,
            model: None,
            price_per_day: 15.0,
            condition: "Good".to_string(),
            images: Vec::new(),
            available: true,
            location: None,
        };

        let first = data.create_item(payload.clone()).await.unwrap();
        let second = data.create_item(payload).await.unwrap();

        let first_id: u64 = first.id.parse().unwrap();
        let second_id: u64 = second.id.parse().unwrap();
        assert!(second_id > first_id);

        let items = data.fetch_items().await.unwrap();
        assert!(items.iter().any(|item| item.id == first.id));
        assert!(items.iter().any(|item| item.id == second.id));
    }

    /// Tests that updates reconcile against the stored record.
    #[tokio::test]
    async fn update_returns_the_stored_record() {
        let data = MockDataSource::new();

        let updated = data.set_item_availability("1", false).await.unwrap();
        assert!(!updated.available);

        let items = data.fetch_items().await.unwrap();
        let stored = items.iter().find(|item| item.id == "1").unwrap();
        assert!(!stored.available);
    }

    /// Tests that updating a missing record fails instead of inventing one.
    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let data = MockDataSource::new();

        let err = data
            .set_item_availability("999", true)
            .await
            .expect_err("missing id");
        assert_eq!(err, FetchError::NotFound("999".to_string()));
    }

    /// Tests the seller-request transition.
    ///
    /// Verifies that approving a pending request moves it to approved and
    /// that a second decision on the now-terminal request is a no-op.
    #[tokio::test]
    async fn seller_decision_is_terminal() {
        let data = MockDataSource::new();

        let approved = data
            .review_seller_request("1", SellerDecision::Approve)
            .await
            .unwrap();
        assert_eq!(approved.status, SellerStatus::Approved);

        let unchanged = data
            .review_seller_request("1", SellerDecision::Reject)
            .await
            .unwrap();
        assert_eq!(unchanged.status, SellerStatus::Approved);
    }

    /// Tests that deletes remove the record from the collection.
    #[tokio::test]
    async fn remove_deletes_the_record() {
        let data = MockDataSource::new();

        data.remove_user("2").await.unwrap();

        let users = data.fetch_users().await.unwrap();
        assert!(users.iter().all(|user| user.id != "2"));
        assert_eq!(users.len(), 2);
    }
}
