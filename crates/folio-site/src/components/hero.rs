//! Landing section.

use dioxus::prelude::*;
use folio_ui::ExternalLink;

use super::use_portfolio;

#[component]
pub fn Hero() -> Element {
    let profile = &use_portfolio().profile;
    let mailto = profile.mailto();

    rsx! {
        section {
            id: "home",
            class: "section hero",
            div { class: "section-grid-bg" }

            div {
                class: "section-inner hero-inner",
                if profile.available {
                    div {
                        class: "hero-badge",
                        span { class: "hero-badge-dot" }
                        "Available for Work"
                    }
                }
                h1 { class: "hero-name", "{profile.name}" }
                p { class: "hero-headline", "{profile.headline}" }
                if !profile.summary.is_empty() {
                    p { class: "hero-summary", "{profile.summary}" }
                }

                div {
                    class: "hero-actions",
                    a { class: "button button-primary", href: "#projects", "View Selected Work ↓" }
                    ExternalLink {
                        href: profile.links.resume.clone(),
                        label: "Download Resume",
                        class: "button button-outline",
                    }
                }

                div {
                    class: "hero-socials",
                    ExternalLink { href: profile.links.github.clone(), label: "GitHub" }
                    ExternalLink { href: profile.links.linkedin.clone(), label: "LinkedIn" }
                    a { class: "external-link", href: "{mailto}", "Email" }
                }
            }
        }
    }
}
