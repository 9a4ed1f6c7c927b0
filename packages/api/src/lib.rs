//! # API crate — REST client for the placement portal backend
//!
//! Every network round-trip the frontends make goes through [`ApiClient`],
//! a thin wrapper over `reqwest` pointed at the Django REST backend. The
//! backend is an external collaborator reached at fixed endpoints; this crate
//! owns the wire models, the client-side validation that runs before any
//! request is sent, and the error taxonomy the UI renders from.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per backend endpoint |
//! | [`models`] | Wire and domain models (notifications, registrations, dashboards, profiles) |
//! | [`validate`] | Client-side form checks ([`RegistrationForm`], phone/email/password rules) |
//! | [`error`] | [`ApiError`]: network / server / decode |

pub mod client;
pub mod error;
pub mod models;
pub mod validate;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    BasicDashboard, DashboardStat, Job, Notification, NotificationKind, NotificationPayload,
    PendingRegistration, RegisterOutcome, StudentDashboard, StudentProfile, UpcomingDrive,
};
pub use validate::{ImageUpload, ProfileUpdate, RegistrationForm, ValidationError};

pub use store::{Session, UserRole};
