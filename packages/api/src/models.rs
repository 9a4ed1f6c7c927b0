//! # Wire and domain models
//!
//! Most types here deserialize straight off the backend's JSON. The one
//! deliberate divergence from the wire is [`Notification`]: the backend ships
//! an open `extra_data` string map on registration-request notifications, and
//! the client converts that into the typed [`NotificationPayload`] enum so
//! render code never does stringly-typed field lookups. [`NotificationDto`]
//! mirrors the wire exactly and converts via `From`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use store::{Session, UserRole};

/// Category of a notification, driving icon and styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    RegistrationRequest,
    /// Anything the client does not recognize; rendered with a neutral style.
    Other,
}

impl NotificationKind {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "info" => NotificationKind::Info,
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "registration_request" => NotificationKind::RegistrationRequest,
            _ => NotificationKind::Other,
        }
    }
}

/// Typed payload attached to a notification.
#[derive(Clone, Debug, PartialEq)]
pub enum NotificationPayload {
    None,
    /// A student registration awaiting teacher action, carried on
    /// `registration_request` notifications.
    RegistrationRequest {
        student_id: String,
        full_name: String,
        roll_no: String,
    },
}

impl NotificationPayload {
    /// Student id if this payload is actionable.
    pub fn student_id(&self) -> Option<&str> {
        match self {
            NotificationPayload::RegistrationRequest { student_id, .. } => Some(student_id),
            NotificationPayload::None => None,
        }
    }
}

/// Notification exactly as the backend serializes it.
#[derive(Clone, Debug, Deserialize)]
pub struct NotificationDto {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub extra_data: Option<HashMap<String, String>>,
}

/// A notification as the UI consumes it. Owned by the backend; the client
/// keeps a per-component cache that is only mutated after a server
/// acknowledgment.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub payload: NotificationPayload,
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        let kind = NotificationKind::from_wire(&dto.kind);
        let payload = match kind {
            NotificationKind::RegistrationRequest => {
                let mut extra = dto.extra_data.unwrap_or_default();
                // A registration request without a student id is not
                // actionable; render it as a plain notification.
                match extra.remove("student_id") {
                    Some(student_id) => NotificationPayload::RegistrationRequest {
                        student_id,
                        full_name: extra.remove("full_name").unwrap_or_default(),
                        roll_no: extra.remove("roll_no").unwrap_or_default(),
                    },
                    None => NotificationPayload::None,
                }
            }
            _ => NotificationPayload::None,
        };
        Notification {
            id: dto.id,
            kind,
            title: dto.title,
            message: dto.message,
            is_read: dto.is_read,
            created_at: dto.created_at,
            payload,
        }
    }
}

/// A student registration awaiting teacher approval. Only visible to
/// teacher-role sessions.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PendingRegistration {
    pub id: i64,
    pub full_name: String,
    pub roll_no: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl PendingRegistration {
    /// Key used by the approval workflow's in-flight flag.
    pub fn student_id(&self) -> String {
        self.id.to_string()
    }
}

/// One stat tile on a dashboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub trend: Option<String>,
}

/// A job listing. Eligibility is computed server-side; the client renders the
/// list it is given without re-filtering.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Job {
    pub id: i64,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills_required: String,
    pub deadline: DateTime<Utc>,
}

/// A placement drive entry on the student dashboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UpcomingDrive {
    pub id: i64,
    pub company: String,
    pub role: String,
    pub month: String,
    pub day: String,
    pub time: String,
}

/// Header block of the student dashboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub cgpa: f64,
    pub department: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Payload of `GET /student/dashboard/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StudentDashboard {
    pub student_info: StudentInfo,
    pub stats: Vec<DashboardStat>,
    #[serde(default)]
    pub recommended_jobs: Vec<Job>,
    #[serde(default)]
    pub upcoming_drives: Vec<UpcomingDrive>,
}

/// Payload of the teacher and placement-officer dashboard endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BasicDashboard {
    #[serde(default)]
    pub message: String,
    pub stats: Vec<DashboardStat>,
}

/// Full student profile as returned by `GET /student/profile/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StudentProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub roll_no: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub overall_cgpa: f64,
    #[serde(default)]
    pub total_backlogs: i64,
    #[serde(default)]
    pub profile_completion: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

/// Outcome of a registration submission.
///
/// The backend either activates the account immediately (the response carries
/// session fields to persist) or parks it behind teacher approval (a flag plus
/// a message, no session).
#[derive(Clone, Debug, PartialEq)]
pub enum RegisterOutcome {
    Activated(Session),
    PendingApproval { message: String },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResponseDto {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl RegisterResponseDto {
    /// `fallback_name` comes from the submitted form; the activation response
    /// does not always echo the name back.
    pub fn into_outcome(self, fallback_name: &str) -> RegisterOutcome {
        match (self.pending, self.user_id) {
            (false, Some(user_id)) => RegisterOutcome::Activated(Session {
                user_id,
                role: self.role.unwrap_or(UserRole::Unknown),
                full_name: self
                    .full_name
                    .unwrap_or_else(|| fallback_name.to_string()),
            }),
            _ => RegisterOutcome::PendingApproval {
                message: self.message,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponseDto {
    pub user_id: String,
    pub role: UserRole,
    pub full_name: String,
}

impl From<LoginResponseDto> for Session {
    fn from(dto: LoginResponseDto) -> Self {
        Session {
            user_id: dto.user_id,
            role: dto.role,
            full_name: dto.full_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_notification_has_no_payload() {
        let dto: NotificationDto = serde_json::from_str(
            r#"{
                "id": 4,
                "type": "success",
                "title": "Application Successful",
                "message": "You have successfully applied for the SDE role at Google.",
                "is_read": false,
                "created_at": "2026-02-20T10:15:00Z"
            }"#,
        )
        .unwrap();
        let n = Notification::from(dto);
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.payload, NotificationPayload::None);
    }

    #[test]
    fn registration_request_extra_data_becomes_typed_payload() {
        let dto: NotificationDto = serde_json::from_str(
            r#"{
                "id": 9,
                "type": "registration_request",
                "title": "New student registration",
                "message": "Ravi Kumar is waiting for approval.",
                "is_read": false,
                "created_at": "2026-02-20T10:15:00Z",
                "extra_data": {"student_id": "17", "full_name": "Ravi Kumar", "roll_no": "2026102400"}
            }"#,
        )
        .unwrap();
        let n = Notification::from(dto);
        assert_eq!(n.kind, NotificationKind::RegistrationRequest);
        assert_eq!(n.payload.student_id(), Some("17"));
        match n.payload {
            NotificationPayload::RegistrationRequest { full_name, roll_no, .. } => {
                assert_eq!(full_name, "Ravi Kumar");
                assert_eq!(roll_no, "2026102400");
            }
            NotificationPayload::None => panic!("expected typed payload"),
        }
    }

    #[test]
    fn registration_request_without_student_id_is_not_actionable() {
        let dto: NotificationDto = serde_json::from_str(
            r#"{
                "id": 10,
                "type": "registration_request",
                "title": "New student registration",
                "message": "A student is waiting for approval.",
                "created_at": "2026-02-20T10:15:00Z"
            }"#,
        )
        .unwrap();
        let n = Notification::from(dto);
        assert_eq!(n.payload, NotificationPayload::None);
    }

    #[test]
    fn unknown_notification_type_is_other() {
        assert_eq!(NotificationKind::from_wire("job_alert"), NotificationKind::Other);
    }

    #[test]
    fn register_response_with_session_fields_is_activated() {
        let dto: RegisterResponseDto = serde_json::from_str(
            r#"{"message": "User registered successfully", "user_id": "9876543210", "role": "placement"}"#,
        )
        .unwrap();
        match dto.into_outcome("Officer Rao") {
            RegisterOutcome::Activated(session) => {
                assert_eq!(session.user_id, "9876543210");
                assert_eq!(session.role, UserRole::Placement);
                assert_eq!(session.full_name, "Officer Rao");
            }
            other => panic!("expected activation, got {other:?}"),
        }
    }

    #[test]
    fn register_response_with_pending_flag_has_no_session() {
        let dto: RegisterResponseDto = serde_json::from_str(
            r#"{"message": "Registration submitted for approval", "pending": true}"#,
        )
        .unwrap();
        assert_eq!(
            dto.into_outcome("Ravi Kumar"),
            RegisterOutcome::PendingApproval {
                message: "Registration submitted for approval".to_string()
            }
        );
    }

    #[test]
    fn student_dashboard_fixture_decodes() {
        let dashboard: StudentDashboard = serde_json::from_str(
            r#"{
                "student_info": {"name": "Ravi Kumar", "cgpa": 8.4, "department": "Computer Science", "image": null},
                "stats": [
                    {"label": "Jobs Applied", "value": "3", "trend": "Total Applications"},
                    {"label": "Backlogs", "value": "0"}
                ],
                "recommended_jobs": [{
                    "id": 1,
                    "company": "Google",
                    "role": "Software Engineer",
                    "location": "Bangalore",
                    "job_type": "Full Time",
                    "salary": "25 LPA",
                    "description": "Work on large scale systems.",
                    "skills_required": "Python, Java",
                    "deadline": "2026-03-01T00:00:00Z"
                }],
                "upcoming_drives": [{
                    "id": 1, "company": "Google", "role": "Software Engineer",
                    "month": "MAR", "day": "01", "time": "10:00 AM"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(dashboard.stats.len(), 2);
        assert_eq!(dashboard.stats[1].trend, None);
        assert_eq!(dashboard.recommended_jobs[0].company, "Google");
    }

    #[test]
    fn pending_registration_decodes() {
        let pending: Vec<PendingRegistration> = serde_json::from_str(
            r#"[{
                "id": 17,
                "full_name": "Ravi Kumar",
                "roll_no": "2026102400",
                "email": "ravi@gmail.com",
                "created_at": "2026-02-19T08:00:00Z"
            }]"#,
        )
        .unwrap();
        assert_eq!(pending[0].student_id(), "17");
    }
}
