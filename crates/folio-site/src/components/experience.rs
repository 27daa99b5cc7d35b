//! Work history timeline followed by education.

use dioxus::prelude::*;
use folio_ui::{use_scroll_reveal, Card, RevealDirection, SectionHeading, TagList};

use super::use_portfolio;
use crate::content::{Education, Role};

#[component]
pub fn Experience() -> Element {
    let portfolio = use_portfolio();
    let work = use_scroll_reveal();
    let school = use_scroll_reveal();

    rsx! {
        section {
            id: "experience",
            class: "section",
            div {
                class: "section-inner",
                SectionHeading {
                    title: "Experience",
                    subtitle: "Where I have worked and what I built there.",
                }
                div {
                    class: work.class("timeline", RevealDirection::Left),
                    onvisible: move |evt| work.observe(evt),
                    for role in portfolio.experience.iter() {
                        RoleCard { key: "{role.company}-{role.period}", role: role.clone() }
                    }
                }

                if !portfolio.education.is_empty() {
                    h3 { class: "subsection-title", "Education" }
                    div {
                        class: school.class("education-list", RevealDirection::Right),
                        onvisible: move |evt| school.observe(evt),
                        for entry in portfolio.education.iter() {
                            EducationCard { key: "{entry.institution}-{entry.period}", entry: entry.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleCard(role: Role) -> Element {
    rsx! {
        div {
            class: "timeline-item",
            span { class: "timeline-dot" }
            Card {
                div {
                    class: "card-header",
                    div {
                        h4 { class: "card-title", "{role.title}" }
                        p { class: "card-meta", "{role.company}" }
                    }
                    div {
                        class: "card-meta card-meta-right",
                        span { "{role.period}" }
                        if !role.location.is_empty() {
                            span { "{role.location}" }
                        }
                    }
                }
                p { class: "card-body", "{role.description}" }
                TagList { tags: role.technologies.clone() }
            }
        }
    }
}

#[component]
fn EducationCard(entry: Education) -> Element {
    rsx! {
        Card {
            class: "education-card",
            div {
                class: "card-header",
                div {
                    h4 { class: "card-title", "{entry.degree}" }
                    p { class: "card-meta", "{entry.institution}" }
                }
                if let Some(status) = entry.status.as_ref() {
                    span { class: "status-badge", "{status}" }
                }
            }
            p { class: "card-meta", "{entry.period}" }
            if !entry.description.is_empty() {
                p { class: "card-body", "{entry.description}" }
            }
            for milestone in entry.milestones.iter() {
                div {
                    key: "{milestone.level}",
                    class: "milestone",
                    div {
                        strong { "{milestone.level}" }
                        span { class: "card-meta", " · {milestone.year}" }
                    }
                    if !milestone.description.is_empty() {
                        p { class: "card-meta", "{milestone.description}" }
                    }
                    if let Some(score) = milestone.score.as_ref() {
                        span { class: "tag", "{score}" }
                    }
                }
            }
        }
    }
}
