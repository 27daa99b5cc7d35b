//! Single-page portfolio desktop app
//!
//! Renders a portfolio document (profile, skills, projects, experience,
//! achievements, certifications, contact) behind a one-time shard intro
//! played by [`folio_intro`].

pub mod components;
pub mod content;
pub mod error;
pub mod settings;
pub mod state;

pub use content::{ContactMessage, Portfolio};
pub use error::{SiteError, SiteResult};
pub use settings::{ModeOverride, Overrides, SiteSettings, WindowSettings};
pub use state::Site;
