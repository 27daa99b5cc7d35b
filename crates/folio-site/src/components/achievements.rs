//! Achievements and publications.

use dioxus::prelude::*;
use folio_ui::{use_scroll_reveal, Card, RevealDirection, SectionHeading, TagList};

use super::use_portfolio;
use crate::content::Achievement;

#[component]
pub fn Achievements() -> Element {
    let portfolio = use_portfolio();
    let reveal = use_scroll_reveal();

    if portfolio.achievements.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            id: "achievements",
            class: "section",
            div {
                class: "section-inner",
                SectionHeading {
                    title: "Achievements & Publications",
                    subtitle: "Recognition and contributions to the wider community.",
                }
                div {
                    class: reveal.class("achievement-list", RevealDirection::Up),
                    onvisible: move |evt| reveal.observe(evt),
                    for achievement in portfolio.achievements.iter() {
                        AchievementCard { key: "{achievement.title}", achievement: achievement.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn AchievementCard(achievement: Achievement) -> Element {
    rsx! {
        Card {
            class: "achievement-card",
            div {
                class: "card-header",
                div {
                    h3 { class: "card-title", "{achievement.title}" }
                    if !achievement.organization.is_empty() {
                        p { class: "card-meta", "{achievement.organization}" }
                    }
                }
                div {
                    class: "card-meta card-meta-right",
                    if let Some(kind) = achievement.kind.as_ref() {
                        span { class: "status-badge", "{kind}" }
                    }
                    span { "{achievement.date}" }
                }
            }
            p { class: "card-body", "{achievement.description}" }
            if !achievement.details.is_empty() {
                dl {
                    class: "detail-list",
                    for detail in achievement.details.iter() {
                        div {
                            key: "{detail.label}",
                            dt { "{detail.label}" }
                            dd { "{detail.value}" }
                        }
                    }
                }
            }
            TagList { tags: achievement.skills.clone() }
        }
    }
}
