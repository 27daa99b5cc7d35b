//! UI components for the portfolio.

mod achievements;
mod app;
mod certifications;
mod contact;
mod experience;
mod hero;
mod intro;
mod navigation;
mod projects;
mod skills;

pub use achievements::Achievements;
pub use app::{App, MainContent};
pub use certifications::Certifications;
pub use contact::Contact;
pub use experience::Experience;
pub use hero::Hero;
pub use intro::IntroOverlay;
pub use navigation::Navigation;
pub use projects::Projects;
pub use skills::Skills;

use dioxus::prelude::*;

use crate::content::Portfolio;
use crate::state::Site;

/// Portfolio provided as context by [`App`].
fn use_portfolio() -> &'static Portfolio {
    let site: &'static Site = use_context();
    &site.portfolio
}
