use crate::model::review::{ReviewDto, ReviewPayload};

use super::{optional, ErrorMap};

/// Controlled field set behind the review add/edit modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewForm {
    pub user_id: String,
    pub item_id: String,
    pub rating: u8,
    pub comment: String,
}

impl ReviewForm {
    pub fn create() -> Self {
        Self {
            user_id: String::new(),
            item_id: String::new(),
            rating: 5,
            comment: String::new(),
        }
    }

    pub fn edit(review: &ReviewDto) -> Self {
        Self {
            user_id: review.user_id.clone(),
            item_id: review.item_id.clone(),
            rating: review.rating,
            comment: review.comment.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();

        if self.user_id.is_empty() {
            errors.insert("user_id", "User is required".to_string());
        }
        if self.item_id.is_empty() {
            errors.insert("item_id", "Item is required".to_string());
        }
        if !(1..=5).contains(&self.rating) {
            errors.insert("rating", "Rating must be between 1 and 5".to_string());
        }

        errors
    }

    /// Runs validation; hands the payload to `on_valid` only when the
    /// field set is clean. Returns the error map either way.
    pub fn submit(&self, on_valid: impl FnOnce(ReviewPayload)) -> ErrorMap {
        let errors = self.validate();
        if errors.is_empty() {
            on_valid(self.to_payload());
        }
        errors
    }

    fn to_payload(&self) -> ReviewPayload {
        ReviewPayload {
            item_id: self.item_id.clone(),
            user_id: self.user_id.clone(),
            rating: self.rating,
            comment: optional(&self.comment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ReviewForm {
        ReviewForm {
            user_id: "1".to_string(),
            item_id: "2".to_string(),
            rating: 4,
            comment: "Great bike.".to_string(),
        }
    }

    /// Tests that a clean form submits its payload.
    #[test]
    fn valid_form_submits_payload() {
        let mut saved = None;

        let errors = filled_form().submit(|payload| saved = Some(payload));

        assert!(errors.is_empty());
        let payload = saved.expect("payload must be produced");
        assert_eq!(payload.rating, 4);
        assert_eq!(payload.comment.as_deref(), Some("Great bike."));
    }

    /// Tests the required-selection properties.
    ///
    /// Verifies that a missing user or item selection never invokes the
    /// save callback.
    #[test]
    fn missing_selections_never_save() {
        let mut form = filled_form();
        form.user_id = String::new();
        form.item_id = String::new();
        let mut saved = false;

        let errors = form.submit(|_| saved = true);

        assert!(!saved);
        assert!(errors.contains_key("user_id"));
        assert!(errors.contains_key("item_id"));
    }

    /// Tests the rating range invariant.
    ///
    /// Expected: every value in 1..=5 accepted, 0 and 6 rejected.
    #[test]
    fn rating_must_be_within_range() {
        let mut form = filled_form();

        for rating in 1..=5 {
            form.rating = rating;
            assert!(
                !form.validate().contains_key("rating"),
                "rating {rating} must be accepted"
            );
        }

        for rating in [0, 6, 200] {
            form.rating = rating;
            assert!(
                form.validate().contains_key("rating"),
                "rating {rating} must be rejected"
            );
        }
    }

    /// Tests that an empty comment coerces to absent.
    #[test]
    fn blank_comment_is_absent_in_the_payload() {
        let mut form = filled_form();
        form.comment = "  ".to_string();
        let mut saved = None;

        form.submit(|payload| saved = Some(payload));

        assert_eq!(saved.expect("payload must be produced").comment, None);
    }
}
