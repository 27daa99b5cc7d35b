//! Fixed top navigation bar with a collapsible menu for narrow windows.

use dioxus::prelude::*;
use folio_ui::{ExternalLink, ThemeToggle};

use super::use_portfolio;

/// Anchor targets in page order.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#experience", "Experience"),
    ("#achievements", "Achievements"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navigation() -> Element {
    let portfolio = use_portfolio();
    let mut menu_open = use_signal(|| false);

    let initials = portfolio.profile.initials();
    let resume = portfolio.profile.links.resume.clone();
    let menu_class = if menu_open() { "nav-menu is-open" } else { "nav-menu" };
    let menu_icon = if menu_open() { "✕" } else { "☰" };

    rsx! {
        nav {
            class: "site-nav",
            div {
                class: "nav-inner",
                a { class: "nav-logo", href: "#home", "{initials}" }

                div {
                    class: "{menu_class}",
                    for (href, label) in NAV_ITEMS.iter().copied() {
                        a {
                            key: "{href}",
                            class: "nav-link",
                            href: "{href}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    ExternalLink { href: resume, label: "Resume", class: "nav-resume" }
                }

                div {
                    class: "nav-actions",
                    ThemeToggle {}
                    button {
                        class: "nav-menu-toggle",
                        title: "Toggle menu",
                        onclick: move |_| menu_open.toggle(),
                        "{menu_icon}"
                    }
                }
            }
        }
    }
}
