//! Role resolution for the home route.

use store::{Session, UserRole};

/// Which dashboard the home route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardVariant {
    Student,
    Teacher,
    PlacementOfficer,
}

/// Map a session to its dashboard variant.
///
/// Total on purpose — this sits on the critical rendering path. A missing
/// session or an unrecognized role falls back to the student dashboard; the
/// fallback is policy, not an error.
pub fn resolve(session: Option<&Session>) -> DashboardVariant {
    match session.map(|s| s.role) {
        Some(UserRole::Teacher) => DashboardVariant::Teacher,
        Some(UserRole::Placement) => DashboardVariant::PlacementOfficer,
        Some(UserRole::Student) | Some(UserRole::Unknown) | None => DashboardVariant::Student,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(role: UserRole) -> Session {
        Session {
            user_id: "9876543210".to_string(),
            role,
            full_name: "Test User".to_string(),
        }
    }

    #[test]
    fn known_roles_map_to_their_dashboards() {
        assert_eq!(
            resolve(Some(&session_with(UserRole::Student))),
            DashboardVariant::Student
        );
        assert_eq!(
            resolve(Some(&session_with(UserRole::Teacher))),
            DashboardVariant::Teacher
        );
        assert_eq!(
            resolve(Some(&session_with(UserRole::Placement))),
            DashboardVariant::PlacementOfficer
        );
    }

    #[test]
    fn unrecognized_role_falls_back_to_student() {
        assert_eq!(
            resolve(Some(&session_with(UserRole::Unknown))),
            DashboardVariant::Student
        );
    }

    #[test]
    fn missing_session_falls_back_to_student() {
        assert_eq!(resolve(None), DashboardVariant::Student);
    }
}
