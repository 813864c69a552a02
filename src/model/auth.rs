use serde::{Deserialize, Serialize};

/// The authenticated staff member's profile.
///
/// Issued by a successful login or token validation and replaced wholesale
/// on re-login; immutable in between.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
}

/// A successful login: the opaque token to persist plus the identity it
/// was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub identity: Identity,
}
