use crate::model::user::{AuthType, KycStatus, UserDto, UserPayload, UserRole, UserStatus};

use super::{is_valid_email, is_valid_mobile, optional, require, ErrorMap};

/// Controlled field set behind the user add/edit modal.
#[derive(Clone, Debug, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub status: UserStatus,
    pub role: UserRole,
    pub kyc_status: KycStatus,
    pub auth_type: AuthType,
    pub address: String,
    pub password: String,
    pub profile_image: String,
    editing: bool,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mobile_number: String::new(),
            status: UserStatus::Active,
            role: UserRole::User,
            kyc_status: KycStatus::NotSubmitted,
            auth_type: AuthType::Email,
            address: String::new(),
            password: String::new(),
            profile_image: String::new(),
            editing: false,
        }
    }

    pub fn edit(user: &UserDto) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            mobile_number: user.mobile_number.clone().unwrap_or_default(),
            status: user.status,
            role: user.role,
            kyc_status: user.kyc_status,
            auth_type: user.auth_type,
            address: user.address.clone().unwrap_or_default(),
            password: String::new(),
            profile_image: user.profile_image.clone().unwrap_or_default(),
            editing: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();

        require(&mut errors, "name", &self.name, "Name is required");

        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required".to_string());
        } else if !is_valid_email(self.email.trim()) {
            errors.insert("email", "Email is invalid".to_string());
        }

        if !self.mobile_number.trim().is_empty() && !is_valid_mobile(self.mobile_number.trim()) {
            errors.insert(
                "mobile_number",
                "Mobile number must be 10 digits".to_string(),
            );
        }

        // Only a new email-authenticated account needs a password.
        if !self.editing && self.auth_type == AuthType::Email && self.password.is_empty() {
            errors.insert(
                "password",
                "Password is required for email authentication".to_string(),
            );
        }

        errors
    }

    /// Runs validation; hands the coerced payload to `on_valid` only when
    /// the field set is clean. Returns the error map either way.
    pub fn submit(&self, on_valid: impl FnOnce(UserPayload)) -> ErrorMap {
        let errors = self.validate();
        if errors.is_empty() {
            on_valid(self.to_payload());
        }
        errors
    }

    fn to_payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            mobile_number: optional(&self.mobile_number),
            status: self.status,
            role: self.role,
            kyc_status: self.kyc_status,
            auth_type: self.auth_type,
            address: optional(&self.address),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
            profile_image: optional(&self.profile_image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> UserForm {
        UserForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            mobile_number: "1234567890".to_string(),
            password: "hunter2secret".to_string(),
            ..UserForm::create()
        }
    }

    /// Tests that a clean create form submits its payload.
    #[test]
    fn valid_form_submits_payload() {
        let mut saved = None;

        let errors = filled_form().submit(|payload| saved = Some(payload));

        assert!(errors.is_empty());
        let payload = saved.expect("payload must be produced");
        assert_eq!(payload.name, "John Doe");
        assert_eq!(payload.mobile_number.as_deref(), Some("1234567890"));
    }

    /// Tests the required-field property.
    ///
    /// Verifies that submitting with an empty required field never invokes
    /// the save callback.
    #[test]
    fn empty_required_field_never_saves() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        let mut saved = false;

        let errors = form.submit(|_| saved = true);

        assert!(!saved);
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
    }

    /// Tests the email pattern rule.
    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();
        form.email = "john-at-example".to_string();

        let errors = form.validate();

        assert_eq!(errors.get("email").map(String::as_str), Some("Email is invalid"));
    }

    /// Tests the optional mobile number rule.
    ///
    /// Expected: empty passes, nine digits fail.
    #[test]
    fn mobile_number_is_optional_but_checked() {
        let mut form = filled_form();
        form.mobile_number = String::new();
        assert!(form.validate().is_empty());

        form.mobile_number = "123456789".to_string();
        assert!(form.validate().contains_key("mobile_number"));
    }

    /// Tests the conditional password requirement.
    ///
    /// Verifies that creating an email-auth user requires a password while
    /// editing one, or creating a Google-auth user, does not.
    #[test]
    fn password_required_only_for_new_email_accounts() {
        let mut form = filled_form();
        form.password = String::new();
        assert!(form.validate().contains_key("password"));

        form.auth_type = AuthType::Google;
        assert!(form.validate().is_empty());

        let existing = UserDto {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            mobile_number: None,
            status: UserStatus::Active,
            role: UserRole::User,
            kyc_status: KycStatus::Verified,
            auth_type: AuthType::Email,
            address: None,
            profile_image: None,
            identity_documents: Vec::new(),
        };
        let edit_form = UserForm::edit(&existing);
        assert!(edit_form.validate().is_empty());
    }

    /// Tests that blank optional fields coerce to absent, not empty strings.
    #[test]
    fn blank_optionals_are_absent_in_the_payload() {
        let mut form = filled_form();
        form.mobile_number = String::new();
        form.address = "  ".to_string();
        let mut saved = None;

        form.submit(|payload| saved = Some(payload));

        let payload = saved.expect("payload must be produced");
        assert_eq!(payload.mobile_number, None);
        assert_eq!(payload.address, None);
    }
}
