//! Registration page view with role-conditional profile fields.

use dioxus::prelude::*;

use api::{ImageUpload, RegisterOutcome, RegistrationForm, UserRole};
use ui::{persist_session, use_api, use_session, SessionState};

use crate::Route;

fn parse_role(value: &str) -> Option<UserRole> {
    match value {
        "student" => Some(UserRole::Student),
        "teacher" => Some(UserRole::Teacher),
        "placement" => Some(UserRole::Placement),
        _ => None,
    }
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_session();
    let client = use_api();
    let nav = use_navigator();

    let mut role = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let mut dob = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut college = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut course = use_signal(String::new);
    let mut semester = use_signal(String::new);
    let mut roll_no = use_signal(String::new);

    let mut designation = use_signal(String::new);
    let mut qualification = use_signal(String::new);
    let mut experience = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut office_role = use_signal(String::new);

    let mut image = use_signal(|| Option::<ImageUpload>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard
    if !auth().loading && auth().session.is_some() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    // Registration accepted but parked behind teacher approval: no session
    // to persist, just the message.
    if let Some(msg) = pending_msg() {
        return rsx! {
            div {
                class: "auth-page",
                div {
                    class: "auth-card",
                    header {
                        class: "auth-header",
                        h2 { "Registration Submitted" }
                    }
                    div { class: "inline-success", "{msg}" }
                    footer {
                        class: "auth-footer",
                        p {
                            "You can sign in once a teacher approves your registration. "
                            Link { to: Route::Login {}, "Back to login" }
                        }
                    }
                }
            }
        };
    }

    let on_image_change = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            let Some(name) = file_engine.files().first().cloned() else {
                return;
            };
            spawn(async move {
                if let Some(bytes) = file_engine.read_file(&name).await {
                    image.set(Some(ImageUpload::from_file(name, bytes)));
                }
            });
        }
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let form = RegistrationForm {
                role: parse_role(&role()),
                full_name: full_name(),
                email: email(),
                phone: phone(),
                password: password(),
                confirm_password: confirm_password(),
                dob: dob(),
                gender: gender(),
                college: college(),
                department: department(),
                course: course(),
                semester: semester(),
                roll_no: roll_no(),
                designation: designation(),
                qualification: qualification(),
                experience: experience(),
                position: position(),
                office_role: office_role(),
                image: image(),
            };

            // Client-side checks block submission; nothing is sent on failure.
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);
            match client.register(&form).await {
                Ok(RegisterOutcome::Activated(session)) => {
                    persist_session(&session);
                    auth.set(SessionState {
                        session: Some(session),
                        loading: false,
                    });
                    nav.push(Route::Home {});
                }
                Ok(RegisterOutcome::PendingApproval { message }) => {
                    loading.set(false);
                    pending_msg.set(Some(message));
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
                class: "auth-card wide",

                header {
                    class: "auth-header",
                    h2 { "Create Account" }
                    p { "Register to access the placement portal" }
                }

                if let Some(err) = error() {
                    div { class: "inline-error", "{err}" }
                }

                form {
                    onsubmit: handle_register,
                    class: "auth-form grid-form",

                    select {
                        class: "input-field",
                        value: role(),
                        onchange: move |evt: FormEvent| role.set(evt.value()),
                        option { value: "", "Select Role" }
                        option { value: "student", "Student" }
                        option { value: "teacher", "Teacher" }
                        option { value: "placement", "Placement Cell Officer" }
                    }

                    Field {
                        placeholder: "Full Name",
                        value: full_name(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    }
                    Field {
                        placeholder: "Email Address",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Field {
                        placeholder: "Mobile Number",
                        r#type: "tel",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }

                    if role() == "student" {
                        Field {
                            placeholder: "Date of Birth",
                            r#type: "date",
                            value: dob(),
                            oninput: move |evt: FormEvent| dob.set(evt.value()),
                        }
                        select {
                            class: "input-field",
                            value: gender(),
                            onchange: move |evt: FormEvent| gender.set(evt.value()),
                            option { value: "", "Select Gender" }
                            option { value: "male", "Male" }
                            option { value: "female", "Female" }
                            option { value: "other", "Other" }
                        }
                        Field {
                            placeholder: "College Name",
                            value: college(),
                            oninput: move |evt: FormEvent| college.set(evt.value()),
                        }
                        Field {
                            placeholder: "Department / Branch",
                            value: department(),
                            oninput: move |evt: FormEvent| department.set(evt.value()),
                        }
                        select {
                            class: "input-field",
                            value: course(),
                            onchange: move |evt: FormEvent| course.set(evt.value()),
                            option { value: "", "Select Course" }
                            option { value: "ug", "UG" }
                            option { value: "pg", "PG" }
                        }
                        Field {
                            placeholder: "Current Semester / Year",
                            value: semester(),
                            oninput: move |evt: FormEvent| semester.set(evt.value()),
                        }
                        Field {
                            placeholder: "Enrollment / Roll Number",
                            value: roll_no(),
                            oninput: move |evt: FormEvent| roll_no.set(evt.value()),
                        }
                    }

                    if role() == "teacher" {
                        Field {
                            placeholder: "Designation",
                            value: designation(),
                            oninput: move |evt: FormEvent| designation.set(evt.value()),
                        }
                        Field {
                            placeholder: "Highest Qualification",
                            value: qualification(),
                            oninput: move |evt: FormEvent| qualification.set(evt.value()),
                        }
                        Field {
                            placeholder: "Department / Branch",
                            value: department(),
                            oninput: move |evt: FormEvent| department.set(evt.value()),
                        }
                        Field {
                            placeholder: "Years of Experience",
                            value: experience(),
                            oninput: move |evt: FormEvent| experience.set(evt.value()),
                        }
                        Field {
                            placeholder: "Position (HOD / Faculty)",
                            value: position(),
                            oninput: move |evt: FormEvent| position.set(evt.value()),
                        }
                    }

                    if role() == "placement" {
                        Field {
                            placeholder: "Designation",
                            value: designation(),
                            oninput: move |evt: FormEvent| designation.set(evt.value()),
                        }
                        Field {
                            placeholder: "Office Role",
                            value: office_role(),
                            oninput: move |evt: FormEvent| office_role.set(evt.value()),
                        }
                        Field {
                            placeholder: "Years of Experience",
                            value: experience(),
                            oninput: move |evt: FormEvent| experience.set(evt.value()),
                        }
                        Field {
                            placeholder: "College Name",
                            value: college(),
                            oninput: move |evt: FormEvent| college.set(evt.value()),
                        }
                    }

                    Field {
                        placeholder: "Password (min 8 characters)",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    Field {
                        placeholder: "Confirm Password",
                        r#type: "password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    label {
                        class: "file-upload",
                        input {
                            r#type: "file",
                            accept: "image/*",
                            onchange: on_image_change,
                        }
                        if let Some(upload) = image() {
                            span { "{upload.file_name}" }
                        } else {
                            span { "Upload Profile Image" }
                        }
                    }

                    button {
                        class: "submit-btn",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Registering..." } else { "Register" }
                    }
                }

                footer {
                    class: "auth-footer",
                    p {
                        "Already have an account? "
                        Link { to: Route::Login {}, "Login" }
                    }
                }
            }
        }
    }
}

#[component]
fn Field(
    placeholder: String,
    #[props(default = "text".to_string())] r#type: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            class: "input-field",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt),
        }
    }
}
