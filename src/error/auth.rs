use thiserror::Error;

/// Authentication failures surfaced by login and session restoration.
///
/// `InvalidCredentials` carries the message shown in the login page banner.
/// `InvalidToken` is raised during startup validation of a persisted token
/// and silently clears the stale session instead of surfacing a banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The provided email/password pair was rejected.
    #[error("{0}")]
    InvalidCredentials(String),
    /// The persisted session token failed validation.
    #[error("Session token is invalid or expired")]
    InvalidToken,
    /// The authentication request never produced a definitive answer.
    #[error("Authentication request failed: {0}")]
    Transport(String),
}
