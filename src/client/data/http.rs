//! REST pass-through to the marketplace backend.
//!
//! Thin JSON client over `reqwasm`: cookies included on every call, non-2xx
//! responses decoded through the backend's `ErrorDto` envelope with a plain
//! text fallback. Of the legacy backend only `GET /admin/user` and
//! `GET /admin/reviews` are confirmed; the remaining verbs follow the same
//! path convention and must be checked against the real contract before
//! this source is pointed at production.

use async_trait::async_trait;
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AuthError, FetchError};
use crate::model::{
    api::ErrorDto,
    auth::{AuthSession, Identity},
    item::{ItemDto, ItemPayload},
    review::{ReviewDto, ReviewPayload},
    seller::{SellerDecision, SellerRequestDto, SellerStatus},
    user::{UserDto, UserPayload},
};

use super::DataSource;

pub struct HttpDataSource {
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;

        decode(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        let url = self.url(path);
        let request = match method {
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };

        let body = serde_json::to_string(body)
            .map_err(|err| FetchError::Request(err.to_string()))?;
        let response = request
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;

        decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), FetchError> {
        let response = Request::delete(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;

        match response.status() {
            200 | 204 => Ok(()),
            status => Err(error_from_response(status, response).await),
        }
    }
}

enum Method {
    Post,
    Put,
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    match response.status() {
        200 | 201 => response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string())),
        status => Err(error_from_response(status, response).await),
    }
}

async fn error_from_response(status: u16, response: Response) -> FetchError {
    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        FetchError::Status {
            status,
            message: error_dto.error,
        }
    } else {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        FetchError::Status { status, message }
    }
}

fn auth_error(err: FetchError) -> AuthError {
    match err {
        FetchError::Status { status: 401, message } => AuthError::InvalidCredentials(message),
        other => AuthError::Transport(other.to_string()),
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct AvailabilityBody {
    available: bool,
}

#[derive(Serialize)]
struct DecisionBody {
    status: SellerStatus,
}

#[async_trait(?Send)]
impl DataSource for HttpDataSource {
    async fn login(&self, email: &str, secret: &str) -> Result<AuthSession, AuthError> {
        self.send_json(
            Method::Post,
            "/admin/login",
            &LoginBody {
                email,
                password: secret,
            },
        )
        .await
        .map_err(auth_error)
    }

    async fn validate_token(&self, token: &str) -> Result<Identity, AuthError> {
        let response = Request::get(&self.url("/admin/me"))
            .credentials(RequestCredentials::Include)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;

        match response.status() {
            200 => response
                .json::<Identity>()
                .await
                .map_err(|err| AuthError::Transport(err.to_string())),
            401 => Err(AuthError::InvalidToken),
            status => Err(AuthError::Transport(
                error_from_response(status, response).await.to_string(),
            )),
        }
    }

    async fn fetch_users(&self) -> Result<Vec<UserDto>, FetchError> {
        self.get_json("/admin/user").await
    }

    async fn create_user(&self, payload: UserPayload) -> Result<UserDto, FetchError> {
        self.send_json(Method::Post, "/admin/user", &payload).await
    }

    async fn update_user(&self, id: &str, payload: UserPayload) -> Result<UserDto, FetchError> {
        self.send_json(Method::Put, &format!("/admin/user/{id}"), &payload)
            .await
    }

    async fn remove_user(&self, id: &str) -> Result<(), FetchError> {
        self.delete(&format!("/admin/user/{id}")).await
    }

    async fn fetch_items(&self) -> Result<Vec<ItemDto>, FetchError> {
        self.get_json("/admin/item").await
    }

    async fn create_item(&self, payload: ItemPayload) -> Result<ItemDto, FetchError> {
        self.send_json(Method::Post, "/admin/item", &payload).await
    }

    async fn update_item(&self, id: &str, payload: ItemPayload) -> Result<ItemDto, FetchError> {
        self.send_json(Method::Put, &format!("/admin/item/{id}"), &payload)
            .await
    }

    async fn remove_item(&self, id: &str) -> Result<(), FetchError> {
        self.delete(&format!("/admin/item/{id}")).await
    }

    async fn set_item_availability(
        &self,
        id: &str,
        available: bool,
    ) -> Result<ItemDto, FetchError> {
        self.send_json(
            Method::Put,
            &format!("/admin/item/{id}/availability"),
            &AvailabilityBody { available },
        )
        .await
    }

    async fn fetch_reviews(&self) -> Result<Vec<ReviewDto>, FetchError> {
        self.get_json("/admin/reviews").await
    }

    async fn create_review(&self, payload: ReviewPayload) -> Result<ReviewDto, FetchError> {
        self.send_json(Method::Post, "/admin/reviews", &payload).await
    }

    async fn update_review(
        &self,
        id: &str,
        payload: ReviewPayload,
    ) -> Result<ReviewDto, FetchError> {
        self.send_json(Method::Put, &format!("/admin/reviews/{id}"), &payload)
            .await
    }

    async fn remove_review(&self, id: &str) -> Result<(), FetchError> {
        self.delete(&format!("/admin/reviews/{id}")).await
    }

    async fn fetch_seller_requests(&self) -> Result<Vec<SellerRequestDto>, FetchError> {
        self.get_json("/admin/seller-request").await
    }

    async fn review_seller_request(
        &self,
        id: &str,
        decision: SellerDecision,
    ) -> Result<SellerRequestDto, FetchError> {
        self.send_json(
            Method::Put,
            &format!("/admin/seller-request/{id}"),
            &DecisionBody {
                status: decision.target_status(),
            },
        )
        .await
    }
}
