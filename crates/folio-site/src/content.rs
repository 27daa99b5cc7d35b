//! Portfolio content model.
//!
//! Everything the section views render comes from one JSON document. A
//! sample document is bundled into the binary; `--content` replaces it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{SiteError, SiteResult};

const BUNDLED_CONTENT: &str = include_str!("../content/portfolio.json");

/// Web mail compose endpoint used by the contact form.
const COMPOSE_ENDPOINT: &str = "https://mail.google.com/mail/";

/// The full portfolio document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Role>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

/// Who the portfolio is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Short line shown under the name during the intro.
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub links: Links,
}

/// Outbound links. Empty strings are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub resume: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// A short glyph shown next to the name.
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    /// Free-form badge such as "In progress".
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// Earlier schooling listed under an education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub level: String,
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub details: Vec<Detail>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Labelled fact such as a chapter title or an ISBN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub verify_url: Option<String>,
}

impl Portfolio {
    /// The sample document shipped with the binary.
    pub fn bundled() -> SiteResult<Self> {
        Self::from_json(BUNDLED_CONTENT, "bundled content")
    }

    /// Load `path`, or the bundled document when no path is given.
    pub fn load(path: Option<&Path>) -> SiteResult<Self> {
        let Some(path) = path else {
            return Self::bundled();
        };

        let text = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::from_json(&text, &path.display().to_string())?;
        tracing::info!(
            path = %path.display(),
            projects = portfolio.projects.len(),
            "Loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// Parse and validate a content document.
    pub fn from_json(text: &str, origin: &str) -> SiteResult<Self> {
        let portfolio: Self = serde_json::from_str(text).map_err(|source| SiteError::Json {
            origin: origin.to_string(),
            source,
        })?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> SiteResult<()> {
        if self.profile.name.trim().is_empty() {
            return Err(SiteError::Content("profile name is empty".into()));
        }
        if !self.profile.email.contains('@') {
            return Err(SiteError::Content(format!(
                "profile email {:?} is not an address",
                self.profile.email
            )));
        }
        Ok(())
    }

    /// Window title derived from the profile.
    pub fn window_title(&self) -> String {
        format!("{} - Portfolio", self.profile.name)
    }
}

impl Profile {
    /// Initials shown in the navigation logo.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// A message typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Whether every field has content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Contact from {}", self.name.trim())
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name.trim(),
            self.email.trim(),
            self.message.trim()
        )
    }

    /// Web mail compose link addressed to `to`, prefilled with this message.
    pub fn compose_url(&self, to: &str) -> SiteResult<Url> {
        let subject = self.subject();
        let body = self.body();
        Url::parse_with_params(
            COMPOSE_ENDPOINT,
            [
                ("view", "cm"),
                ("fs", "1"),
                ("to", to),
                ("su", subject.as_str()),
                ("body", body.as_str()),
            ],
        )
        .map_err(|e| SiteError::Content(format!("compose url: {e}")))
    }

    /// `mailto:` link addressed to `to`, prefilled with this message.
    pub fn mailto_url(&self, to: &str) -> SiteResult<Url> {
        let mut url = Url::parse(&format!("mailto:{to}"))
            .map_err(|e| SiteError::Content(format!("mailto url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("subject", &self.subject())
            .append_pair("body", &self.body());
        // Mail clients read `+` literally; form encoding already escaped real pluses.
        let query = url.query().map(|q| q.replace('+', "%20"));
        url.set_query(query.as_deref());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            message: "Hello & welcome".into(),
        }
    }

    #[test]
    fn test_bundled_content_parses() {
        let portfolio = Portfolio::bundled().unwrap();
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.certifications.is_empty());
    }

    #[test]
    fn test_minimal_document() {
        let text = r#"{ "profile": { "name": "Ada Park", "headline": "Engineer", "email": "ada@example.org" } }"#;
        let portfolio = Portfolio::from_json(text, "inline").unwrap();
        assert!(portfolio.projects.is_empty());
        assert_eq!(portfolio.profile.links, Links::default());
        assert_eq!(portfolio.profile.initials(), "AP");
        assert_eq!(portfolio.window_title(), "Ada Park - Portfolio");
    }

    #[test]
    fn test_rejects_bad_email() {
        let text = r#"{ "profile": { "name": "Ada", "headline": "x", "email": "nobody" } }"#;
        let err = Portfolio::from_json(text, "inline").unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
    }

    #[test]
    fn test_rejects_missing_profile() {
        let err = Portfolio::from_json("{}", "inline").unwrap_err();
        assert!(matches!(err, SiteError::Json { .. }));
    }

    #[test]
    fn test_incomplete_message() {
        let mut msg = message();
        assert!(msg.is_complete());
        msg.message = "   ".into();
        assert!(!msg.is_complete());
    }

    #[test]
    fn test_compose_url_encodes_fields() {
        let url = message().compose_url("me@example.org").unwrap();
        assert_eq!(url.host_str(), Some("mail.google.com"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("view".into(), "cm".into())));
        assert!(pairs.contains(&("to".into(), "me@example.org".into())));
        assert!(pairs.contains(&("su".into(), "Portfolio Contact from Ada".into())));
        let body = pairs.iter().find(|(k, _)| k == "body").map(|(_, v)| v.as_str());
        assert_eq!(
            body,
            Some("Name: Ada\nEmail: ada@example.org\n\nMessage:\nHello & welcome")
        );
        assert!(!url.as_str().contains("Hello & welcome"));
    }

    #[test]
    fn test_mailto_url() {
        let url = message().mailto_url("me@example.org").unwrap();
        assert_eq!(url.scheme(), "mailto");
        assert_eq!(url.path(), "me@example.org");
        let subject = url
            .query_pairs()
            .find(|(k, _)| k == "subject")
            .map(|(_, v)| v.into_owned());
        assert_eq!(subject.as_deref(), Some("Portfolio Contact from Ada"));
        assert!(!url.as_str().contains('+'));
        assert!(url.as_str().contains("Portfolio%20Contact%20from%20Ada"));
    }
}
