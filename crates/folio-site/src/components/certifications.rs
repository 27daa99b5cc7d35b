//! Certification cards with verification links.

use dioxus::prelude::*;
use folio_ui::{use_scroll_reveal, Card, ExternalLink, RevealDirection, SectionHeading, TagList};

use super::use_portfolio;
use crate::content::Certification;

#[component]
pub fn Certifications() -> Element {
    let portfolio = use_portfolio();
    let reveal = use_scroll_reveal();

    if portfolio.certifications.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            id: "certifications",
            class: "section",
            div {
                class: "section-inner",
                SectionHeading {
                    title: "Certifications",
                    subtitle: "Courses and programmes I have completed.",
                }
                div {
                    class: reveal.class("certification-grid", RevealDirection::Up),
                    onvisible: move |evt| reveal.observe(evt),
                    for cert in portfolio.certifications.iter() {
                        CertificationCard { key: "{cert.title}", cert: cert.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn CertificationCard(cert: Certification) -> Element {
    let verify = cert.verify_url.clone().unwrap_or_default();
    // Placeholder ids such as "-" are not worth showing.
    let credential = cert
        .credential_id
        .clone()
        .filter(|id| id.chars().any(char::is_alphanumeric));

    rsx! {
        Card {
            class: "certification-card",
            h3 { class: "card-title", "{cert.title}" }
            p { class: "card-meta", "{cert.issuer} · {cert.date}" }
            if !cert.description.is_empty() {
                p { class: "card-body", "{cert.description}" }
            }
            if let Some(id) = credential {
                p { class: "credential-id", "Credential ID: {id}" }
            }
            TagList { tags: cert.skills.clone() }
            div {
                class: "card-links",
                ExternalLink { href: verify, label: "Verify Credential" }
            }
        }
    }
}
