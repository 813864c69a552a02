use serde::{Deserialize, Serialize};

use crate::model::seller::DocumentDto;

/// Account standing of a marketplace user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marketplace role; `Admin` grants access to this dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::User, UserRole::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Know-Your-Customer verification progress.
///
/// The legacy backend emits `"NOT SUBMITTED"` with an embedded space, so
/// the rename must carry it verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KycStatus {
    #[serde(rename = "NOT SUBMITTED")]
    NotSubmitted,
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "VERIFIED")]
    Verified,
}

impl KycStatus {
    pub const ALL: [KycStatus; 3] = [
        KycStatus::NotSubmitted,
        KycStatus::Pending,
        KycStatus::Verified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::NotSubmitted => "NOT SUBMITTED",
            KycStatus::Pending => "PENDING",
            KycStatus::Verified => "VERIFIED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the account authenticates against the marketplace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthType {
    #[serde(rename = "EMAIL")]
    Email,
    #[serde(rename = "GOOGLE")]
    Google,
}

impl AuthType {
    pub const ALL: [AuthType; 2] = [AuthType::Email, AuthType::Google];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Email => "EMAIL",
            AuthType::Google => "GOOGLE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|auth| auth.as_str() == value)
    }
}

impl std::fmt::Display for AuthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marketplace user as listed on the Users page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile_number: Option<String>,
    pub status: UserStatus,
    #[serde(rename = "userType")]
    pub role: UserRole,
    pub kyc_status: KycStatus,
    pub auth_type: AuthType,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, rename = "profileImage")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub identity_documents: Vec<DocumentDto>,
}

/// Editable fields captured by the user form and sent on create/update.
///
/// `password` is only set when creating an email-authenticated account and
/// is never echoed back by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    pub status: UserStatus,
    #[serde(rename = "userType")]
    pub role: UserRole,
    pub kyc_status: KycStatus,
    pub auth_type: AuthType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "profileImage", skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}
