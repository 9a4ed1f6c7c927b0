//! Role-specific dashboards.
//!
//! Each dashboard reads the session for the display name, issues exactly one
//! fetch for its role's stats endpoint, and renders a loading placeholder
//! until it resolves. The notification feed is a separate subsystem; a
//! dashboard never waits on it.

use dioxus::prelude::*;

use api::{BasicDashboard, DashboardStat, StudentDashboard};

use crate::session::{use_api, use_session};

/// One stat tile.
#[component]
pub fn StatsCard(stat: DashboardStat) -> Element {
    rsx! {
        div {
            class: "stats-card",
            div { class: "stats-value", "{stat.value}" }
            div { class: "stats-label", "{stat.label}" }
            if let Some(trend) = stat.trend.clone() {
                div { class: "stats-trend", "{trend}" }
            }
        }
    }
}

#[component]
fn StatsGrid(stats: Vec<DashboardStat>) -> Element {
    rsx! {
        div {
            class: "stats-grid",
            for (i, stat) in stats.into_iter().enumerate() {
                StatsCard { key: "{i}", stat }
            }
        }
    }
}

/// Student landing dashboard: stats, eligible jobs (server-computed, the
/// client renders what it is given), and upcoming drives.
#[component]
pub fn StudentHome() -> Element {
    let auth = use_session();
    let client = use_api();
    let mut dash = use_signal(|| Option::<StudentDashboard>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);
    let mut applying = use_signal(|| false);
    let mut status = use_signal(|| Option::<String>::None);

    let name = auth()
        .session
        .as_ref()
        .map(|s| s.full_name.clone())
        .unwrap_or_else(|| "Student".to_string());
    let user_id = auth().session.as_ref().map(|s| s.user_id.clone());

    let fetch_client = client.clone();
    let fetch_id = user_id.clone();
    let _loader = use_resource(move || {
        let client = fetch_client.clone();
        let user_id = fetch_id.clone();
        async move {
            let Some(user_id) = user_id else { return };
            match client.student_dashboard(&user_id).await {
                Ok(data) => dash.set(Some(data)),
                Err(e) => error.set(Some(e.to_string())),
            }
            loaded.set(true);
        }
    });

    let on_apply = move |job_id: i64| {
        // One application request at a time; the backend rejects duplicates
        // anyway, but the button stays honest about what is in flight.
        if applying() {
            return;
        }
        applying.set(true);
        let client = client.clone();
        let user_id = user_id.clone();
        spawn(async move {
            let Some(user_id) = user_id else {
                applying.set(false);
                return;
            };
            match client.apply_for_job(&user_id, job_id).await {
                Ok(()) => status.set(Some("Application submitted.".to_string())),
                Err(e) => status.set(Some(e.to_string())),
            }
            applying.set(false);
        });
    };

    rsx! {
        div {
            class: "home-page",
            header {
                class: "hero-header",
                h1 { "Welcome back, " span { class: "highlight-text", "{name}" } }
                p { "Track your applications and find your next opportunity." }
            }

            if let Some(err) = error() {
                div { class: "inline-error", "{err}" }
            }
            if let Some(msg) = status() {
                div { class: "inline-success", "{msg}" }
            }

            if !loaded() {
                div { class: "loading-placeholder", "Loading your dashboard..." }
            } else if let Some(data) = dash() {
                StatsGrid { stats: data.stats.clone() }

                section {
                    class: "jobs-section",
                    h2 { "Recommended Jobs" }
                    if data.recommended_jobs.is_empty() {
                        div { class: "empty-state", "No eligible jobs right now. Check back soon." }
                    } else {
                        div {
                            class: "jobs-list",
                            for job in data.recommended_jobs.clone() {
                                div {
                                    key: "{job.id}",
                                    class: "job-card",
                                    div {
                                        class: "job-info",
                                        h3 { "{job.role}" }
                                        p { class: "job-company", "{job.company} \u{00b7} {job.location}" }
                                        p { class: "job-meta", "{job.job_type} \u{00b7} {job.salary}" }
                                    }
                                    button {
                                        class: "apply-btn",
                                        disabled: applying(),
                                        onclick: {
                                            let mut on_apply = on_apply.clone();
                                            move |_| on_apply(job.id)
                                        },
                                        "Apply"
                                    }
                                }
                            }
                        }
                    }
                }

                section {
                    class: "drives-section",
                    h2 { "Upcoming Drives" }
                    if data.upcoming_drives.is_empty() {
                        div { class: "empty-state", "No drives scheduled." }
                    } else {
                        div {
                            class: "drives-list",
                            for drive in data.upcoming_drives.clone() {
                                div {
                                    key: "{drive.id}",
                                    class: "drive-card",
                                    div {
                                        class: "drive-date",
                                        span { class: "month", "{drive.month}" }
                                        span { class: "day", "{drive.day}" }
                                    }
                                    div {
                                        class: "drive-info",
                                        h4 { "{drive.company}" }
                                        p { "{drive.role} \u{00b7} {drive.time}" }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "empty-state", "No dashboard data available." }
            }
        }
    }
}

/// Teacher dashboard: stats about students and approvals.
#[component]
pub fn TeacherHome() -> Element {
    let auth = use_session();

    let name = auth()
        .session
        .as_ref()
        .map(|s| s.full_name.clone())
        .unwrap_or_else(|| "Teacher".to_string());

    rsx! {
        BasicHome {
            name,
            subtitle: "Manage your students and their progress.",
            endpoint: StatsEndpoint::Teacher,
        }
    }
}

/// Placement officer dashboard: drive and company stats.
#[component]
pub fn PlacementHome() -> Element {
    let auth = use_session();

    let name = auth()
        .session
        .as_ref()
        .map(|s| s.full_name.clone())
        .unwrap_or_else(|| "Officer".to_string());

    rsx! {
        BasicHome {
            name,
            subtitle: "Coordinate drives and track placements.",
            endpoint: StatsEndpoint::Placement,
        }
    }
}

/// Which stats-only endpoint a [`BasicHome`] instance fetches.
#[derive(Clone, Copy, Debug, PartialEq)]
enum StatsEndpoint {
    Teacher,
    Placement,
}

/// Shared shell for the two stats-only dashboards.
#[component]
fn BasicHome(name: String, subtitle: String, endpoint: StatsEndpoint) -> Element {
    let client = use_api();
    let mut dash = use_signal(|| Option::<BasicDashboard>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            let result = match endpoint {
                StatsEndpoint::Teacher => client.teacher_dashboard().await,
                StatsEndpoint::Placement => client.placement_dashboard().await,
            };
            match result {
                Ok(data) => dash.set(Some(data)),
                Err(e) => error.set(Some(e.to_string())),
            }
            loaded.set(true);
        }
    });

    rsx! {
        div {
            class: "home-page",
            header {
                class: "hero-header",
                h1 { "Welcome back, " span { class: "highlight-text", "{name}" } }
                p { "{subtitle}" }
            }

            if let Some(err) = error() {
                div { class: "inline-error", "{err}" }
            }

            if !loaded() {
                div { class: "loading-placeholder", "Loading dashboard..." }
            } else if let Some(data) = dash() {
                if data.stats.is_empty() {
                    div { class: "empty-state", "No stats available yet." }
                } else {
                    StatsGrid { stats: data.stats.clone() }
                }
            } else {
                div { class: "empty-state", "No dashboard data available." }
            }
        }
    }
}
