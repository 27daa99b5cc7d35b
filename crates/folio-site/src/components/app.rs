//! Page root: intro latch and main content.

use dioxus::prelude::*;
use folio_intro::{IntroLatch, PageView};
use folio_ui::{ThemedRoot, CURRENT_THEME};

use crate::state;

use super::{
    Achievements, Certifications, Contact, Experience, Hero, IntroOverlay, Navigation, Projects,
    Skills,
};

/// Root application component.
#[component]
pub fn App() -> Element {
    // Installed by main before launch, so this is the same on every render.
    let Some(site) = state::site() else {
        tracing::error!("App launched without an installed site");
        return rsx! {
            div { class: "site-error", "No portfolio content loaded." }
        };
    };

    // Theme is set here because GlobalSignal needs the Dioxus runtime
    use_hook(move || {
        *CURRENT_THEME.write() = site.settings.theme;
    });
    use_context_provider(move || site);

    let mut latch = use_signal(move || {
        if site.skip_intro {
            IntroLatch::skipped()
        } else {
            IntroLatch::new()
        }
    });

    let view = PageView::of(&latch.read());
    let profile = &site.portfolio.profile;

    rsx! {
        ThemedRoot {
            {match view {
                PageView::Intro => rsx! {
                    IntroOverlay {
                        config: site.settings.intro.clone(),
                        name: profile.name.clone(),
                        headline: profile.headline.clone(),
                        tagline: profile.tagline.clone(),
                        on_finish: move |_| {
                            if latch.write().dismiss() {
                                tracing::info!("Intro handed off to main content");
                            }
                        },
                    }
                },
                PageView::Main => rsx! { MainContent {} },
            }}
        }
    }
}

/// Every section of the page, faded in once on mount.
#[component]
pub fn MainContent() -> Element {
    rsx! {
        div {
            class: "main-content",
            Navigation {}
            main {
                Hero {}
                Skills {}
                Projects {}
                Experience {}
                Achievements {}
                Certifications {}
                Contact {}
            }
            footer {
                class: "site-footer",
                "Built with Rust and Dioxus"
            }
        }
    }
}
