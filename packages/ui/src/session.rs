//! Session context and hooks for the UI.
//!
//! Identity is injected once at the root: [`SessionProvider`] hydrates the
//! persisted session and shares it (plus one [`ApiClient`]) through context,
//! so components never re-read storage mid-session and cannot diverge.

use api::ApiClient;
use dioxus::prelude::*;
use store::{Session, SessionBackend, SessionStore};

/// Session state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the persisted session has been read. Hydration is
    /// synchronous, so views only ever observe this as `false`; it exists so
    /// dashboards can distinguish "no session yet" from "logged out".
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

/// Create the platform-appropriate session store:
/// - **Web** (WASM + `web` feature): browser localStorage
/// - **Desktop** (native): JSON file under the platform data directory
pub fn make_session_store() -> SessionStore<impl SessionBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorageBackend::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::new(store::MemoryBackend::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SessionStore::new(store::FileBackend::default_location())
    }
}

/// Persist a freshly issued session (login or immediate-activation
/// registration), overwriting any prior one.
pub fn persist_session(session: &Session) {
    make_session_store().save(session);
}

/// Drop the persisted session.
pub fn clear_session() {
    make_session_store().clear();
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that owns session state and the API client.
/// Wrap the app with this component; a malformed persisted blob is treated
/// as no session, never a crash.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let auth = use_signal(|| SessionState {
        session: make_session_store().load_or_none(),
        loading: false,
    });
    use_context_provider(|| auth);
    use_context_provider(ApiClient::default);

    rsx! {
        {children}
    }
}

/// Button that logs the current user out and clears persisted state.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_session();

    let onclick = move |_| {
        clear_session();
        auth.set(SessionState {
            session: None,
            loading: false,
        });
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
