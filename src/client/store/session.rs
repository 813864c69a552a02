//! The session store: the single owner of the authenticated identity.
//!
//! Pages read the session through context; only the login page, the logout
//! button, and the startup restore path mutate it. A persisted token is
//! honored only after [`DataSource::validate_token`] confirms it, never on
//! presence alone.
//!
//! [`DataSource::validate_token`]: crate::client::data::DataSource::validate_token

use dioxus_logger::tracing;
use gloo_storage::{LocalStorage, Storage};

use crate::model::auth::Identity;

/// localStorage key holding the opaque session token.
pub const TOKEN_STORAGE_KEY: &str = "admin_auth_token";

/// The current authenticated session.
///
/// Created on successful login, cleared on logout or when startup
/// validation rejects the persisted token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    identity: Option<Identity>,
    token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replaces the session wholesale after login or token validation.
    pub fn begin(&mut self, identity: Identity, token: String) {
        self.identity = Some(identity);
        self.token = Some(token);
    }

    /// Clears identity and token; the session is unauthenticated afterwards.
    pub fn clear(&mut self) {
        self.identity = None;
        self.token = None;
    }
}

/// Writes the session token under the fixed storage key.
pub fn persist_token(token: &str) {
    if let Err(err) = LocalStorage::set(TOKEN_STORAGE_KEY, token) {
        tracing::error!("failed to persist session token: {err}");
    }
}

/// Reads the persisted session token, if any.
pub fn load_token() -> Option<String> {
    LocalStorage::get(TOKEN_STORAGE_KEY).ok()
}

/// Removes the persisted session token.
pub fn clear_token() {
    LocalStorage::delete(TOKEN_STORAGE_KEY);
}

#[cfg(test)]
mod tests {
    use super::SessionState;
    use crate::model::auth::Identity;

    fn admin_identity() -> Identity {
        Identity {
            id: "1".to_string(),
            display_name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
        }
    }

    /// Tests the default session.
    ///
    /// Expected: unauthenticated with no identity and no token.
    #[test]
    fn default_session_is_unauthenticated() {
        let session = SessionState::default();

        assert!(!session.is_authenticated());
        assert!(session.current_identity().is_none());
        assert!(session.token().is_none());
    }

    /// Tests that beginning a session makes it authenticated.
    #[test]
    fn begin_sets_identity_and_token() {
        let mut session = SessionState::default();

        session.begin(admin_identity(), "token-1".to_string());

        assert!(session.is_authenticated());
        assert_eq!(
            session.current_identity().map(|i| i.email.as_str()),
            Some("admin@example.com")
        );
        assert_eq!(session.token(), Some("token-1"));
    }

    /// Tests that re-login replaces the identity wholesale.
    #[test]
    fn begin_replaces_previous_session() {
        let mut session = SessionState::default();
        session.begin(admin_identity(), "token-1".to_string());

        let mut other = admin_identity();
        other.id = "2".to_string();
        session.begin(other, "token-2".to_string());

        assert_eq!(session.current_identity().map(|i| i.id.as_str()), Some("2"));
        assert_eq!(session.token(), Some("token-2"));
    }

    /// Tests logout semantics.
    ///
    /// Verifies that clearing always returns the session to the
    /// unauthenticated state regardless of what it held.
    #[test]
    fn clear_always_unauthenticates() {
        let mut session = SessionState::default();
        session.begin(admin_identity(), "token-1".to_string());

        session.clear();

        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }
}
