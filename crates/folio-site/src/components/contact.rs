//! Contact details and a message form.
//!
//! The form never submits anywhere. It only fills in compose links for the
//! visitor's web mail or mail client.

use dioxus::prelude::*;
use folio_ui::{use_scroll_reveal, Card, ExternalLink, RevealDirection, SectionHeading};

use super::use_portfolio;
use crate::content::ContactMessage;

#[component]
pub fn Contact() -> Element {
    let profile = &use_portfolio().profile;
    let details = use_scroll_reveal();
    let form = use_scroll_reveal();
    let mut draft = use_signal(ContactMessage::default);

    let message = draft.read().clone();
    let (compose, mailto) = if message.is_complete() {
        match (
            message.compose_url(&profile.email),
            message.mailto_url(&profile.email),
        ) {
            (Ok(compose), Ok(mailto)) => (compose.to_string(), mailto.to_string()),
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(%err, "Could not build contact links");
                (String::new(), String::new())
            }
        }
    } else {
        (String::new(), String::new())
    };
    let ready = !compose.is_empty();
    let direct_mail = profile.mailto();

    rsx! {
        section {
            id: "contact",
            class: "section",
            div {
                class: "section-inner",
                SectionHeading {
                    title: "Get In Touch",
                    subtitle: "Have a project in mind or just want to say hello? My inbox is open.",
                }
                div {
                    class: "contact-grid",
                    div {
                        class: details.class("contact-details", RevealDirection::Left),
                        onvisible: move |evt| details.observe(evt),
                        Card {
                            h3 { class: "card-title", "Contact Information" }
                            a { class: "contact-row", href: "{direct_mail}", "✉ {profile.email}" }
                            if let Some(phone) = profile.phone.as_ref() {
                                div { class: "contact-row", "☏ {phone}" }
                            }
                            if !profile.location.is_empty() {
                                div { class: "contact-row", "⌖ {profile.location}" }
                            }
                            div {
                                class: "contact-socials",
                                ExternalLink { href: profile.links.github.clone(), label: "GitHub" }
                                ExternalLink { href: profile.links.linkedin.clone(), label: "LinkedIn" }
                            }
                        }
                    }

                    div {
                        class: form.class("contact-form", RevealDirection::Right),
                        onvisible: move |evt| form.observe(evt),
                        Card {
                            h3 { class: "card-title", "Send a Message" }
                            input {
                                class: "field",
                                r#type: "text",
                                placeholder: "Your name",
                                value: "{message.name}",
                                oninput: move |evt| draft.write().name = evt.value(),
                            }
                            input {
                                class: "field",
                                r#type: "email",
                                placeholder: "your.email@example.com",
                                value: "{message.email}",
                                oninput: move |evt| draft.write().email = evt.value(),
                            }
                            textarea {
                                class: "field field-message",
                                placeholder: "Tell me about your project...",
                                rows: "5",
                                value: "{message.message}",
                                oninput: move |evt| draft.write().message = evt.value(),
                            }
                            if ready {
                                div {
                                    class: "contact-actions",
                                    ExternalLink { href: compose, label: "Send via Gmail", class: "button button-primary" }
                                    a { class: "button button-outline", href: "{mailto}", "Open Mail App" }
                                }
                            } else {
                                p { class: "card-meta", "Fill in every field to compose your message." }
                            }
                        }
                    }
                }
            }
        }
    }
}
