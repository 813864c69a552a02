//! Controlled form state and field-level validation.
//!
//! Each entity modal owns one of these form structs, seeded from an
//! existing record (edit) or defaults (create). `validate` returns an
//! [`ErrorMap`]; `submit` builds the coerced payload and hands it to the
//! caller only when that map is empty, so an invalid form can never reach
//! the data source.

pub mod item;
pub mod review;
pub mod user;

use std::collections::BTreeMap;

pub use item::ItemForm;
pub use review::ReviewForm;
pub use user::UserForm;

/// Field name → inline message. Ordered so messages render stably.
pub type ErrorMap = BTreeMap<&'static str, String>;

pub(crate) fn require(errors: &mut ErrorMap, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message.to_string());
    }
}

/// Basic shape check in the spirit of the usual `\S+@\S+\.\S+` pattern,
/// not a full address parse.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Optional mobile numbers must be exactly ten digits when present.
pub fn is_valid_mobile(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, is_valid_mobile};

    /// Tests the email shape check against representative inputs.
    #[test]
    fn email_pattern_accepts_plausible_addresses() {
        assert!(is_valid_email("admin@example.com"));
        assert!(is_valid_email("a@b.co"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("admin@example"));
        assert!(!is_valid_email("admin @example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("admin@.com"));
    }

    /// Tests the ten-digit mobile number rule.
    #[test]
    fn mobile_numbers_must_be_ten_digits() {
        assert!(is_valid_mobile("1234567890"));

        assert!(!is_valid_mobile("123456789"));
        assert!(!is_valid_mobile("12345678901"));
        assert!(!is_valid_mobile("12345abcde"));
    }
}
