use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Home, Landing, Login, Notifications, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/index")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/home")]
    Home {},
    #[route("/notifications")]
    Notifications {},
    #[route("/profile")]
    Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting placement portal");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// `/` goes straight to the dashboard when a session exists, otherwise to
/// the landing page.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let auth = ui::use_session();
    if auth().session.is_some() {
        nav.replace(Route::Home {});
    } else {
        nav.replace(Route::Landing {});
    }
    rsx! {}
}
