//! # Client-side identity model
//!
//! [`Session`] is the single source of client-side identity: it is created from
//! a login or registration response, persisted through a
//! [`crate::SessionStore`], and destroyed on logout. The absence of a session
//! means the client is unauthenticated; views render a loading placeholder or
//! redirect, never crash.

use serde::{Deserialize, Serialize};

/// Role of the logged-in user.
///
/// The backend sends `"placement"` for placement cell officers, but older
/// payloads used `"placement_officer"`; both map to the same variant. Any
/// other string deserializes to [`UserRole::Unknown`] rather than failing,
/// since the role sits on the critical rendering path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Teacher,
    #[serde(alias = "placement_officer")]
    Placement,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Wire string the backend expects for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Placement => "placement",
            UserRole::Unknown => "student",
        }
    }
}

/// The authenticated user, as persisted between page loads.
///
/// `user_id` is the phone-number-shaped identifier every backend endpoint is
/// keyed on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: UserRole,
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip() {
        let s: UserRole = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(s, UserRole::Student);
        let p: UserRole = serde_json::from_str("\"placement\"").unwrap();
        assert_eq!(p, UserRole::Placement);
        // legacy alias
        let p2: UserRole = serde_json::from_str("\"placement_officer\"").unwrap();
        assert_eq!(p2, UserRole::Placement);
    }

    #[test]
    fn unrecognized_role_is_unknown_not_error() {
        let r: UserRole = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(r, UserRole::Unknown);
    }

    #[test]
    fn session_roundtrip() {
        let session = Session {
            user_id: "9876543210".to_string(),
            role: UserRole::Teacher,
            full_name: "Asha Verma".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
