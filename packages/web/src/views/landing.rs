//! Public landing page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "landing-page",

            h1 {
                class: "landing-title",
                span { class: "gradient-text", "College Placement" }
                br {}
                "Cell Portal"
            }

            p {
                class: "landing-subtitle",
                "Connecting talented students with top-tier companies. Explore "
                "opportunities, build skills, and land your dream job."
            }

            div {
                class: "landing-cta",
                button {
                    class: "btn-primary",
                    onclick: move |_| { nav.push(Route::Login {}); },
                    "Explore Opportunities \u{2192}"
                }
                button {
                    class: "btn-secondary",
                    onclick: move |_| { nav.push(Route::Register {}); },
                    "Register"
                }
            }

            div {
                class: "landing-stats",
                LandingStat { number: "70+", label: "Companies" }
                LandingStat { number: "95%", label: "Placement Rate" }
                LandingStat { number: "100+", label: "Students Placed" }
            }

            div {
                class: "landing-features",
                FeatureCard {
                    title: "Student Registration",
                    description: "Create your profile and get discovered by top recruiters",
                }
                FeatureCard {
                    title: "Career Resources",
                    description: "Career guidance, resume reviews & workshops",
                }
                FeatureCard {
                    title: "Campus Drives",
                    description: "Stay updated with upcoming placement drives",
                }
            }
        }
    }
}

#[component]
fn LandingStat(number: String, label: String) -> Element {
    rsx! {
        div {
            class: "landing-stat",
            div { class: "stat-number", "{number}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

#[component]
fn FeatureCard(title: String, description: String) -> Element {
    rsx! {
        div {
            class: "feature-card",
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}
