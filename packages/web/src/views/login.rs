//! Login page view with phone/password/role form.

use dioxus::prelude::*;

use ui::{persist_session, use_api, use_session, SessionState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_session();
    let client = use_api();
    let nav = use_navigator();

    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard
    if !auth().loading && auth().session.is_some() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            if phone().trim().is_empty() || password().is_empty() || role().is_empty() {
                error.set(Some("Please complete all fields to continue.".to_string()));
                return;
            }

            loading.set(true);
            match client.login(phone().trim(), &password(), &role()).await {
                Ok(session) => {
                    persist_session(&session);
                    auth.set(SessionState {
                        session: Some(session),
                        loading: false,
                    });
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",

                header {
                    class: "auth-header",
                    h2 { "Welcome Back" }
                    p { "Sign in to access your portal" }
                }

                if let Some(err) = error() {
                    div { class: "inline-error", "{err}" }
                }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",

                    input {
                        class: "input-field",
                        r#type: "tel",
                        placeholder: "Phone Number",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }

                    input {
                        class: "input-field",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    select {
                        class: "input-field",
                        value: role(),
                        onchange: move |evt: FormEvent| role.set(evt.value()),
                        option { value: "", "Select Role" }
                        option { value: "student", "Student" }
                        option { value: "teacher", "Teacher" }
                        option { value: "placement", "Placement Cell Officer" }
                    }

                    button {
                        class: "submit-btn",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                footer {
                    class: "auth-footer",
                    p {
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Register now" }
                    }
                }
            }
        }
    }
}
