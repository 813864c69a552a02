//! Pure, synchronous filter predicates behind the page search bars.
//!
//! Search is case-insensitive substring matching over the entity's visible
//! text fields, AND-combined with the page's equality filters. Recomputed
//! on every keystroke; idempotent by construction.

use crate::model::{item::ItemDto, review::ReviewDto, user::UserDto, user::UserStatus};

/// Case-insensitive substring match; an empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    /// `None` renders as "All Statuses".
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &UserDto) -> bool {
        let matches_search =
            contains_ci(&user.name, &self.search) || contains_ci(&user.email, &self.search);
        let matches_status = self.status.is_none_or(|status| user.status == status);
        matches_search && matches_status
    }

    pub fn apply(&self, users: &[UserDto]) -> Vec<UserDto> {
        users
            .iter()
            .filter(|user| self.matches(user))
            .cloned()
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemFilter {
    pub search: String,
    /// `None` renders as "All Categories".
    pub category: Option<String>,
    /// `None` renders as "All Availability".
    pub available: Option<bool>,
}

impl ItemFilter {
    pub fn matches(&self, item: &ItemDto) -> bool {
        let matches_search = contains_ci(&item.title, &self.search)
            || contains_ci(&item.description, &self.search);
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|category| item.category == category);
        let matches_availability = self
            .available
            .is_none_or(|available| item.available == available);
        matches_search && matches_category && matches_availability
    }

    pub fn apply(&self, items: &[ItemDto]) -> Vec<ItemDto> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

/// Distinct categories present in the collection, in first-seen order,
/// for the category filter dropdown.
pub fn category_options(items: &[ItemDto]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewFilter {
    pub search: String,
    /// `None` renders as "All Ratings".
    pub rating: Option<u8>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &ReviewDto) -> bool {
        let comment = review.comment.as_deref().unwrap_or_default();
        let matches_search = contains_ci(&review.item_title, &self.search)
            || contains_ci(&review.user_name, &self.search)
            || contains_ci(comment, &self.search);
        let matches_rating = self.rating.is_none_or(|rating| review.rating == rating);
        matches_search && matches_rating
    }

    pub fn apply(&self, reviews: &[ReviewDto]) -> Vec<ReviewDto> {
        reviews
            .iter()
            .filter(|review| self.matches(review))
            .cloned()
            .collect()
    }
}
