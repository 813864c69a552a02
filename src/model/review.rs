use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rental review as listed on the Reviews page.
///
/// `item_title` and `user_name` are denormalized by the backend purely for
/// display; the canonical references are `item_id` and `user_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub item_id: String,
    pub user_id: String,
    /// Star rating, always within `1..=5`.
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub item_title: String,
    #[serde(default)]
    pub user_name: String,
}

/// Editable fields captured by the review form and sent on create/update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub item_id: String,
    pub user_id: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
