use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verification state of a seller request.
///
/// The legacy backend is inconsistent about the approved value and emits
/// either `"approved"` or the boolean-like `"true"`; both deserialize to
/// [`SellerStatus::Approved`]. New writes always emit `"approved"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SellerStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "approved", alias = "true")]
    Approved,
    #[serde(rename = "rejected")]
    Rejected,
}

impl SellerStatus {
    /// Approved and rejected requests never transition again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SellerStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SellerStatus::Pending => "pending",
            SellerStatus::Approved => "approved",
            SellerStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staff decision on a pending seller request. Never serialized itself;
/// the wire carries the target [`SellerStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SellerDecision {
    Approve,
    Reject,
}

impl SellerDecision {
    /// The terminal status this decision moves a pending request into.
    pub fn target_status(&self) -> SellerStatus {
        match self {
            SellerDecision::Approve => SellerStatus::Approved,
            SellerDecision::Reject => SellerStatus::Rejected,
        }
    }
}

/// An identity document submitted with a seller request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// A user's request to become a verified seller.
///
/// Derived by the backend from the user record whose verification field is
/// pending, approved, or rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRequestDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub status: SellerStatus,
    #[serde(default)]
    pub documents: Vec<DocumentDto>,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests canonicalization of the legacy boolean-like approved value.
    ///
    /// Verifies that `"true"` deserializes to `Approved` while serialization
    /// always emits the canonical `"approved"`.
    #[test]
    fn legacy_true_parses_as_approved() {
        let status: SellerStatus = serde_json::from_str("\"true\"").unwrap();
        assert_eq!(status, SellerStatus::Approved);

        let emitted = serde_json::to_string(&status).unwrap();
        assert_eq!(emitted, "\"approved\"");
    }

    /// Tests that the three canonical wire values round-trip unchanged.
    #[test]
    fn canonical_values_round_trip() {
        for (value, status) in [
            ("\"pending\"", SellerStatus::Pending),
            ("\"approved\"", SellerStatus::Approved),
            ("\"rejected\"", SellerStatus::Rejected),
        ] {
            let parsed: SellerStatus = serde_json::from_str(value).unwrap();
            assert_eq!(parsed, status);
            assert_eq!(serde_json::to_string(&status).unwrap(), value);
        }
    }

    /// Tests the terminal-state predicate.
    ///
    /// Expected: only `Pending` may still transition.
    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!SellerStatus::Pending.is_terminal());
        assert!(SellerStatus::Approved.is_terminal());
        assert!(SellerStatus::Rejected.is_terminal());
    }
}
