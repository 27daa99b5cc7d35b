//! Project cards.

use dioxus::prelude::*;
use folio_ui::{use_scroll_reveal, Card, ExternalLink, RevealDirection, SectionHeading, TagList};

use super::use_portfolio;
use crate::content::Project;

#[component]
pub fn Projects() -> Element {
    let portfolio = use_portfolio();
    let reveal = use_scroll_reveal();
    let github = portfolio.profile.links.github.clone();

    rsx! {
        section {
            id: "projects",
            class: "section",
            div {
                class: "section-inner",
                SectionHeading {
                    title: "Featured Projects",
                    subtitle: "A selection of things I have designed, built and shipped.",
                }
                div {
                    class: reveal.class("projects-grid", RevealDirection::Up),
                    onvisible: move |evt| reveal.observe(evt),
                    for project in portfolio.projects.iter() {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
                div {
                    class: "section-more",
                    ExternalLink { href: github, label: "More on GitHub →", class: "button button-outline" }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let live = project.live_url.clone().unwrap_or_default();
    let source = project.source_url.clone().unwrap_or_default();

    rsx! {
        Card {
            class: "project-card",
            div {
                class: "card-header",
                h3 { class: "card-title", "{project.title}" }
                if let Some(status) = project.status.as_ref() {
                    span { class: "status-badge", "{status}" }
                }
            }
            p { class: "card-body", "{project.description}" }
            TagList { tags: project.technologies.clone() }
            div {
                class: "card-links",
                ExternalLink { href: live, label: "Live Demo" }
                ExternalLink { href: source, label: "Code" }
            }
        }
    }
}
