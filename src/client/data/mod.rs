//! The data-source seam between pages and the marketplace backend.
//!
//! List controllers and the session store depend only on [`DataSource`];
//! the app wires in either the REST pass-through
//! ([`http::HttpDataSource`]) when a base URL is configured or the
//! in-memory [`mock::MockDataSource`] otherwise. Every write round-trips
//! through the interface and the caller reconciles its local state from
//! the returned record.

#[cfg(feature = "web")]
pub mod http;
pub mod mock;

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::{AuthError, FetchError};
use crate::model::{
    auth::{AuthSession, Identity},
    item::{ItemDto, ItemPayload},
    review::{ReviewDto, ReviewPayload},
    seller::{SellerDecision, SellerRequestDto},
    user::{UserDto, UserPayload},
};

/// Operations the dashboard needs from the marketplace backend.
///
/// Futures are `?Send` because the app runs single-threaded on wasm.
#[async_trait(?Send)]
pub trait DataSource {
    /// Exchanges credentials for a session token and identity.
    async fn login(&self, email: &str, secret: &str) -> Result<AuthSession, AuthError>;

    /// Confirms a persisted token and returns the identity it belongs to.
    async fn validate_token(&self, token: &str) -> Result<Identity, AuthError>;

    async fn fetch_users(&self) -> Result<Vec<UserDto>, FetchError>;
    async fn create_user(&self, payload: UserPayload) -> Result<UserDto, FetchError>;
    async fn update_user(&self, id: &str, payload: UserPayload) -> Result<UserDto, FetchError>;
    async fn remove_user(&self, id: &str) -> Result<(), FetchError>;

    async fn fetch_items(&self) -> Result<Vec<ItemDto>, FetchError>;
    async fn create_item(&self, payload: ItemPayload) -> Result<ItemDto, FetchError>;
    async fn update_item(&self, id: &str, payload: ItemPayload) -> Result<ItemDto, FetchError>;
    async fn remove_item(&self, id: &str) -> Result<(), FetchError>;
    /// Flips the listing's availability flag.
    async fn set_item_availability(&self, id: &str, available: bool)
        -> Result<ItemDto, FetchError>;

    async fn fetch_reviews(&self) -> Result<Vec<ReviewDto>, FetchError>;
    async fn create_review(&self, payload: ReviewPayload) -> Result<ReviewDto, FetchError>;
    async fn update_review(&self, id: &str, payload: ReviewPayload)
        -> Result<ReviewDto, FetchError>;
    async fn remove_review(&self, id: &str) -> Result<(), FetchError>;

    async fn fetch_seller_requests(&self) -> Result<Vec<SellerRequestDto>, FetchError>;
    /// Applies an approve/reject decision. Terminal requests are returned
    /// unchanged.
    async fn review_seller_request(
        &self,
        id: &str,
        decision: SellerDecision,
    ) -> Result<SellerRequestDto, FetchError>;
}

/// Shared handle injected through context so pages depend only on the
/// interface, never on a concrete implementation.
#[derive(Clone)]
pub struct DataHandle(pub Rc<dyn DataSource>);

impl std::ops::Deref for DataHandle {
    type Target = dyn DataSource;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for DataHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
