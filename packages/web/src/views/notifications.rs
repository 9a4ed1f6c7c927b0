//! Notifications page: the shared feed panel behind a session gate.

use dioxus::prelude::*;

use ui::{use_session, Navbar, NotificationsPanel};

use crate::Route;

#[component]
pub fn Notifications() -> Element {
    let auth = use_session();
    let nav = use_navigator();
    let state = auth();

    if state.loading {
        return rsx! {
            div { class: "loading-placeholder", "Loading..." }
        };
    }

    if state.session.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Navbar {}
        div {
            class: "home-page",
            NotificationsPanel {}
        }
    }
}
