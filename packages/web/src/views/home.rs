//! Signed-in landing: dispatches to the dashboard matching the session role.

use dioxus::prelude::*;

use ui::{resolve, use_session, DashboardVariant, Navbar, PlacementHome, StudentHome, TeacherHome};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_session();
    let nav = use_navigator();
    let state = auth();

    if state.loading {
        return rsx! {
            div { class: "loading-placeholder", "Loading..." }
        };
    }

    let Some(session) = state.session else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    rsx! {
        Navbar {}
        match resolve(Some(&session)) {
            DashboardVariant::Student => rsx! { StudentHome {} },
            DashboardVariant::Teacher => rsx! { TeacherHome {} },
            DashboardVariant::PlacementOfficer => rsx! { PlacementHome {} },
        }
    }
}
