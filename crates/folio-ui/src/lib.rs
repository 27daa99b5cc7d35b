//! Shared UI components for the Folio portfolio.
//!
//! Provides the theme system, the scroll-reveal hook and the small building
//! blocks (section headings, cards, tag lists) every section view uses.

pub mod reveal;
pub mod section;
pub mod theme;

pub use reveal::{reveal_class, use_scroll_reveal, RevealDirection, ScrollReveal};
pub use section::{Card, ExternalLink, SectionHeading, TagList};
pub use theme::{Theme, ThemeToggle, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
