//! Settings file and command-line overrides.
//!
//! Settings are a JSON document with every field defaulted, so an empty
//! object is a valid settings file:
//!
//! ```json
//! {
//!   "intro": { "mode": { "kind": "scripted-timer", "delay_ms": 2500 } },
//!   "window": { "width": 1280, "height": 860 },
//!   "theme": "light"
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use folio_intro::config::saturating_millis;
use folio_intro::{IntroConfig, IntroMode};
use folio_ui::Theme;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Desktop window geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Title override. Falls back to the profile name.
    pub title: Option<String>,
    pub width: f64,
    pub height: f64,
    pub maximized: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: None,
            width: 1280.0,
            height: 860.0,
            maximized: false,
        }
    }
}

/// Everything configurable about the app apart from the content itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub intro: IntroConfig,
    pub window: WindowSettings,
    pub theme: Theme,
}

/// Intro mode chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeOverride {
    Scripted,
    Interactive,
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<ModeOverride>,
    pub intro_delay: Option<Duration>,
    pub seed: Option<u64>,
}

impl SiteSettings {
    /// Load settings from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> SiteResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Parse and validate a settings document.
    pub fn from_json(text: &str, origin: &str) -> SiteResult<Self> {
        let settings: Self = serde_json::from_str(text).map_err(|source| SiteError::Json {
            origin: origin.to_string(),
            source,
        })?;
        settings.intro.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply(&mut self, overrides: &Overrides) -> SiteResult<()> {
        let delay_ms = overrides.intro_delay.map(saturating_millis);

        match overrides.mode {
            Some(ModeOverride::Scripted) => {
                let current = match self.intro.mode {
                    IntroMode::ScriptedTimer { delay_ms } => delay_ms,
                    IntroMode::InteractiveStaged => folio_intro::config::DEFAULT_SCRIPTED_DELAY_MS,
                };
                self.intro.mode = IntroMode::ScriptedTimer {
                    delay_ms: delay_ms.unwrap_or(current),
                };
            }
            Some(ModeOverride::Interactive) => {
                self.intro.mode = IntroMode::InteractiveStaged;
            }
            None => {
                if let (IntroMode::ScriptedTimer { delay_ms: current }, Some(ms)) =
                    (&mut self.intro.mode, delay_ms)
                {
                    *current = ms;
                }
            }
        }

        if delay_ms.is_some() && self.intro.is_interactive() {
            tracing::warn!("--intro-delay-ms only applies to the scripted intro; ignoring");
        }

        if let Some(seed) = overrides.seed {
            self.intro.seed = Some(seed);
        }

        self.intro.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_intro::{ConfigError, FallingExit};

    #[test]
    fn test_empty_object_is_default() {
        let settings = SiteSettings::from_json("{}", "inline").unwrap();
        assert_eq!(settings, SiteSettings::default());
        assert!(settings.intro.is_interactive());
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_partial_document() {
        let text = r#"{
            "intro": {
                "mode": { "kind": "scripted-timer" },
                "falling_exit": { "kind": "after", "ms": 900 }
            },
            "window": { "maximized": true },
            "theme": "light"
        }"#;
        let settings = SiteSettings::from_json(text, "inline").unwrap();

        assert_eq!(settings.intro.mode, IntroMode::ScriptedTimer { delay_ms: 2500 });
        assert_eq!(settings.intro.falling_exit, FallingExit::After { ms: 900 });
        assert!(settings.window.maximized);
        assert_eq!(settings.window.width, 1280.0);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let text = r#"{ "intro": { "grid": { "rows": 0, "cols": 12 } } }"#;
        let err = SiteSettings::from_json(text, "inline").unwrap_err();
        assert!(matches!(
            err,
            SiteError::Config(ConfigError::EmptyGrid { rows: 0, cols: 12 })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = SiteSettings::from_json("{ \"theme\": ", "broken.json").unwrap_err();
        assert!(matches!(err, SiteError::Json { ref origin, .. } if origin == "broken.json"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = SiteSettings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

        let settings = SiteSettings::load(Some(&path)).unwrap();
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_mode_override_to_scripted() {
        let mut settings = SiteSettings::default();
        settings
            .apply(&Overrides {
                mode: Some(ModeOverride::Scripted),
                intro_delay: Some(Duration::from_millis(1200)),
                seed: Some(7),
            })
            .unwrap();

        assert_eq!(settings.intro.mode, IntroMode::ScriptedTimer { delay_ms: 1200 });
        assert_eq!(settings.intro.seed, Some(7));
    }

    #[test]
    fn test_delay_override_keeps_scripted_mode() {
        let mut settings = SiteSettings {
            intro: IntroConfig::scripted(Duration::from_millis(2500)),
            ..Default::default()
        };
        settings
            .apply(&Overrides {
                intro_delay: Some(Duration::from_millis(400)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.intro.mode, IntroMode::ScriptedTimer { delay_ms: 400 });
    }

    #[test]
    fn test_huge_delay_saturates() {
        let mut settings = SiteSettings::default();
        settings
            .apply(&Overrides {
                mode: Some(ModeOverride::Scripted),
                intro_delay: Some(Duration::MAX),
                seed: None,
            })
            .unwrap();

        assert_eq!(settings.intro.mode, IntroMode::ScriptedTimer { delay_ms: u64::MAX });
    }

    #[test]
    fn test_delay_ignored_for_interactive() {
        let mut settings = SiteSettings::default();
        settings
            .apply(&Overrides {
                intro_delay: Some(Duration::from_millis(400)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.intro.mode, IntroMode::InteractiveStaged);
    }
}
