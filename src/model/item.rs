use serde::{Deserialize, Serialize};

/// Category catalog offered by the item form.
pub const CATEGORIES: [&str; 9] = [
    "Electronics",
    "Furniture",
    "Books",
    "Vehicles",
    "Clothing",
    "Sports",
    "Outdoor",
    "Tools",
    "Others",
];

/// Condition catalog offered by the item form.
pub const CONDITIONS: [&str; 6] = [
    "Like New",
    "Good",
    "Brand New",
    "Excellent",
    "Fair",
    "Acceptable",
];

/// A rentable item as listed on the Items page.
///
/// `price_per_day` is always strictly positive; the item form rejects
/// anything else before a payload is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub price_per_day: f64,
    pub condition: String,
    /// Ordered image URLs; the first one is the listing thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
    pub available: bool,
    #[serde(default)]
    pub location: Option<String>,
    pub owner_id: String,
}

/// Editable fields captured by the item form and sent on create/update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub price_per_day: f64,
    pub condition: String,
    pub images: Vec<String>,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
