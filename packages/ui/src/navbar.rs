use dioxus::prelude::*;

use store::UserRole;

use crate::session::{use_session, LogoutButton};

/// Top navigation bar. Hidden entirely while unauthenticated; the profile
/// link only appears for student sessions.
#[component]
pub fn Navbar() -> Element {
    let auth = use_session();

    let Some(session) = auth().session else {
        return rsx! {};
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-links",
                a { href: "/home", "Dashboard" }
                a { href: "/notifications", "Notifications" }
                if session.role == UserRole::Student {
                    a { href: "/profile", "Profile" }
                }
            }
            div {
                class: "navbar-user",
                span { class: "navbar-name", "{session.full_name}" }
                LogoutButton { class: "logout-btn" }
            }
        }
    }
}
