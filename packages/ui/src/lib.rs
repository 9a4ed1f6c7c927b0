//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{
    clear_session, make_session_store, persist_session, use_api, use_session, LogoutButton,
    SessionProvider, SessionState,
};

mod role;
pub use role::{resolve, DashboardVariant};

mod feed;
pub use feed::{FeedState, NotificationsPanel};

mod approvals;
pub use approvals::{ApprovalPanel, ApprovalQueue};

mod dashboard;
pub use dashboard::{PlacementHome, StatsCard, StudentHome, TeacherHome};

mod confirm;
pub use confirm::ConfirmDialog;

mod navbar;
pub use navbar::Navbar;
