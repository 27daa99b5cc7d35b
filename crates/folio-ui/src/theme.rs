//! Theme system for the portfolio.
//!
//! Two themes, dark and light, switched by a toggle in the navigation bar.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Available themes for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Round button flipping between the dark and light themes.
#[component]
pub fn ThemeToggle() -> Element {
    let current = *CURRENT_THEME.read();
    let next = current.toggled();
    let icon = match current {
        Theme::Dark => "☾",
        Theme::Light => "☀",
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: "Switch to {next.display_name()} theme",
            onclick: move |_| {
                tracing::debug!(theme = next.css_value(), "Theme switched");
                *CURRENT_THEME.write() = next;
            },
            "{icon}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_css_values() {
        assert_eq!(Theme::default().css_value(), "dark");
        assert_eq!(Theme::Light.css_value(), "light");
    }
}
