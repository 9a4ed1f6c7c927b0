//! Student profile page: view and edit academic details.

use dioxus::prelude::*;

use api::{ImageUpload, ProfileUpdate, UserRole};
use ui::{use_api, use_session, Navbar};

use crate::Route;

#[component]
pub fn Profile() -> Element {
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

    // Only student accounts carry an editable profile.
    if session.role != UserRole::Student {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        Navbar {}
        div {
            class: "home-page",
            ProfileCard { user_id: session.user_id.clone() }
        }
    }
}

#[component]
fn ProfileCard(user_id: String) -> Element {
    let client = use_api();

    let mut profile = use_resource({
        let client = client.clone();
        let user_id = user_id.clone();
        move || {
            let client = client.clone();
            let user_id = user_id.clone();
            async move { client.student_profile(&user_id).await }
        }
    });

    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);

    let mut dob = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut college = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut course = use_signal(String::new);
    let mut semester = use_signal(String::new);
    let mut roll_no = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut image = use_signal(|| Option::<ImageUpload>::None);
    let mut resume = use_signal(|| Option::<ImageUpload>::None);

    let loaded = profile.read().clone();

    // Seed the edit form from the latest snapshot.
    let mut start_editing = {
        let loaded = loaded.clone();
        move |_| {
            if let Some(Ok(p)) = &loaded {
                dob.set(p.dob.clone());
                gender.set(p.gender.clone());
                college.set(p.college.clone());
                department.set(p.department.clone());
                course.set(p.course.clone());
                semester.set(p.semester.clone());
                roll_no.set(p.roll_no.clone());
                skills.set(p.skills.clone());
                image.set(None);
                resume.set(None);
                error.set(None);
                status.set(None);
                editing.set(true);
            }
        }
    };

    let handle_save = {
        let client = client.clone();
        let user_id = user_id.clone();
        let loaded = loaded.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let user_id = user_id.clone();
            let Some(Ok(before)) = loaded.clone() else {
                return;
            };
            spawn(async move {
                error.set(None);

                // Only the fields that actually changed go on the wire.
                let changed = |new: String, old: &str| -> Option<String> {
                    if new != old {
                        Some(new)
                    } else {
                        None
                    }
                };
                let update = ProfileUpdate {
                    dob: changed(dob(), &before.dob),
                    gender: changed(gender(), &before.gender),
                    college: changed(college(), &before.college),
                    department: changed(department(), &before.department),
                    course: changed(course(), &before.course),
                    semester: changed(semester(), &before.semester),
                    roll_no: changed(roll_no(), &before.roll_no),
                    skills: changed(skills(), &before.skills),
                    image: image(),
                    resume: resume(),
                };

                if update.is_empty() {
                    editing.set(false);
                    return;
                }

                saving.set(true);
                match client.update_profile(&user_id, &update).await {
                    Ok(()) => {
                        saving.set(false);
                        editing.set(false);
                        status.set(Some("Profile updated.".to_string()));
                        // Re-fetch after the server acknowledged the change.
                        profile.restart();
                    }
                    Err(e) => {
                        saving.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

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

    let on_resume_change = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            let Some(name) = file_engine.files().first().cloned() else {
                return;
            };
            spawn(async move {
                if let Some(bytes) = file_engine.read_file(&name).await {
                    resume.set(Some(ImageUpload::from_file(name, bytes)));
                }
            });
        }
    };

    match loaded {
        None => rsx! {
            div { class: "loading-placeholder", "Loading profile..." }
        },
        Some(Err(e)) => rsx! {
            div { class: "profile-page",
                div { class: "inline-error", "Could not load profile: {e}" }
            }
        },
        Some(Ok(p)) => rsx! {
            div {
                class: "profile-page",

                header {
                    class: "profile-header",
                    h2 { "{p.full_name}" }
                    p { class: "profile-contact", "{p.email} \u{b7} {p.phone}" }
                    div {
                        class: "profile-completion",
                        "Profile {p.profile_completion}% complete"
                    }
                }

                if let Some(msg) = status() {
                    div { class: "inline-success", "{msg}" }
                }
                if let Some(err) = error() {
                    div { class: "inline-error", "{err}" }
                }

                if editing() {
                    form {
                        onsubmit: handle_save,
                        class: "auth-form grid-form",

                        input {
                            class: "input-field",
                            r#type: "date",
                            placeholder: "Date of Birth",
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
                        input {
                            class: "input-field",
                            placeholder: "College Name",
                            value: college(),
                            oninput: move |evt: FormEvent| college.set(evt.value()),
                        }
                        input {
                            class: "input-field",
                            placeholder: "Department / Branch",
                            value: department(),
                            oninput: move |evt: FormEvent| department.set(evt.value()),
                        }
                        input {
                            class: "input-field",
                            placeholder: "Course",
                            value: course(),
                            oninput: move |evt: FormEvent| course.set(evt.value()),
                        }
                        input {
                            class: "input-field",
                            placeholder: "Current Semester / Year",
                            value: semester(),
                            oninput: move |evt: FormEvent| semester.set(evt.value()),
                        }
                        input {
                            class: "input-field",
                            placeholder: "Enrollment / Roll Number",
                            value: roll_no(),
                            oninput: move |evt: FormEvent| roll_no.set(evt.value()),
                        }
                        input {
                            class: "input-field",
                            placeholder: "Skills (comma separated)",
                            value: skills(),
                            oninput: move |evt: FormEvent| skills.set(evt.value()),
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
                                span { "Update Profile Image" }
                            }
                        }
                        label {
                            class: "file-upload",
                            input {
                                r#type: "file",
                                accept: ".pdf",
                                onchange: on_resume_change,
                            }
                            if let Some(upload) = resume() {
                                span { "{upload.file_name}" }
                            } else {
                                span { "Upload Resume (PDF)" }
                            }
                        }

                        div {
                            class: "profile-actions",
                            button {
                                class: "submit-btn",
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Saving..." } else { "Save Changes" }
                            }
                            button {
                                class: "cancel-btn",
                                r#type: "button",
                                disabled: saving(),
                                onclick: move |_| editing.set(false),
                                "Cancel"
                            }
                        }
                    }
                } else {
                    div {
                        class: "profile-details",
                        ProfileRow { label: "Date of Birth", value: p.dob.clone() }
                        ProfileRow { label: "Gender", value: p.gender.clone() }
                        ProfileRow { label: "College", value: p.college.clone() }
                        ProfileRow { label: "Department", value: p.department.clone() }
                        ProfileRow { label: "Course", value: p.course.clone() }
                        ProfileRow { label: "Semester", value: p.semester.clone() }
                        ProfileRow { label: "Roll Number", value: p.roll_no.clone() }
                        ProfileRow { label: "Skills", value: p.skills.clone() }
                        ProfileRow { label: "CGPA", value: format!("{:.2}", p.overall_cgpa) }
                        ProfileRow { label: "Backlogs", value: p.total_backlogs.to_string() }
                    }
                    button {
                        class: "submit-btn",
                        onclick: move |evt| start_editing(evt),
                        "Edit Profile"
                    }
                }
            }
        },
    }
}

#[component]
fn ProfileRow(label: String, value: String) -> Element {
    let shown = if value.is_empty() { "\u{2014}".to_string() } else { value };
    rsx! {
        div {
            class: "profile-row",
            span { class: "profile-label", "{label}" }
            span { class: "profile-value", "{shown}" }
        }
    }
}
