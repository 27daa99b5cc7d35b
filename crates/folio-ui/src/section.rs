//! Building blocks shared by the section views.

use dioxus::prelude::*;

use crate::reveal::{use_scroll_reveal, RevealDirection};

/// Centered section title with a short subtitle, revealed on scroll.
#[component]
pub fn SectionHeading(title: String, subtitle: String) -> Element {
    let reveal = use_scroll_reveal();

    rsx! {
        div {
            class: reveal.class("section-heading", RevealDirection::Up),
            onvisible: move |evt| reveal.observe(evt),
            h2 { class: "section-title", "{title}" }
            p { class: "section-subtitle", "{subtitle}" }
        }
    }
}

/// Bordered, blurred panel.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card {class}",
            {children}
        }
    }
}

/// Row of small pill badges.
#[component]
pub fn TagList(tags: Vec<String>) -> Element {
    rsx! {
        div {
            class: "tag-list",
            for tag in tags.iter() {
                span { key: "{tag}", class: "tag", "{tag}" }
            }
        }
    }
}

/// Link opening outside the app. Renders nothing for placeholder targets.
#[component]
pub fn ExternalLink(href: String, label: String, #[props(default)] class: String) -> Element {
    if href.is_empty() || href == "#" {
        return rsx! {};
    }

    rsx! {
        a {
            class: "external-link {class}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            "{label}"
        }
    }
}
