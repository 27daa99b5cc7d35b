//! Process-wide site state installed by `main` before the app launches.

use std::sync::OnceLock;

use crate::content::Portfolio;
use crate::settings::SiteSettings;

/// Everything the app renders from, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Site {
    pub portfolio: Portfolio,
    pub settings: SiteSettings,
    /// Start with the intro latch already dismissed.
    pub skip_intro: bool,
}

impl Site {
    pub fn window_title(&self) -> String {
        self.settings
            .window
            .title
            .clone()
            .unwrap_or_else(|| self.portfolio.window_title())
    }
}

static SITE: OnceLock<Site> = OnceLock::new();

/// Install the site. Returns false if one was already installed.
pub fn install(site: Site) -> bool {
    SITE.set(site).is_ok()
}

/// The installed site, if any.
pub fn site() -> Option<&'static Site> {
    SITE.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_falls_back_to_profile() {
        let mut site = Site {
            portfolio: Portfolio::bundled().unwrap(),
            settings: SiteSettings::default(),
            skip_intro: false,
        };
        assert_eq!(site.window_title(), site.portfolio.window_title());

        site.settings.window.title = Some("Custom".into());
        assert_eq!(site.window_title(), "Custom");
    }

    #[test]
    fn test_install_once() {
        let site = Site {
            portfolio: Portfolio::bundled().unwrap(),
            settings: SiteSettings::default(),
            skip_intro: true,
        };
        assert!(install(site.clone()));
        assert!(!install(site));
        assert!(self::site().is_some_and(|s| s.skip_intro));
    }
}
