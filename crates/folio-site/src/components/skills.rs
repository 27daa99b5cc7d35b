//! Skills grouped by category.

use dioxus::prelude::*;
use folio_ui::{use_scroll_reveal, Card, RevealDirection, SectionHeading};

use super::use_portfolio;
use crate::content::SkillCategory;

#[component]
pub fn Skills() -> Element {
    let portfolio = use_portfolio();
    let reveal = use_scroll_reveal();

    rsx! {
        section {
            id: "skills",
            class: "section",
            div {
                class: "section-inner",
                SectionHeading {
                    title: "Skills & Technologies",
                    subtitle: "The languages, frameworks and tools I work with day to day.",
                }
                div {
                    class: reveal.class("skills-grid", RevealDirection::Up),
                    onvisible: move |evt| reveal.observe(evt),
                    for category in portfolio.skills.iter() {
                        SkillCard { key: "{category.title}", category: category.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> Element {
    rsx! {
        Card {
            class: "skill-card",
            h3 { class: "card-title", "{category.title}" }
            ul {
                class: "skill-list",
                for skill in category.skills.iter() {
                    li {
                        key: "{skill.name}",
                        class: "skill",
                        span { class: "skill-icon", "{skill.icon}" }
                        span { class: "skill-name", "{skill.name}" }
                    }
                }
            }
        }
    }
}
