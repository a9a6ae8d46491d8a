use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::icon::Icon;

const PROFILE_FILE: &str = "profile.json";

pub static PROFILE: LazyLock<Profile> =
    LazyLock::new(|| Profile::load().expect("embedded profile content should be valid"));

/// The site content, read once on first access.
pub fn profile() -> &'static Profile {
    &PROFILE
}

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile content not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse profile content: {0}")]
    ParseError(String),
    #[error("{0} is missing a title")]
    EmptyTitle(&'static str),
    #[error("Contact form {0} is empty")]
    MissingContact(&'static str),
    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub brand: String,
    pub avatar: String,
    pub resume: Resume,
    pub social: Vec<SocialLink>,
    pub projects: Vec<Project>,
    pub education: Education,
    pub about_text: String,
    pub skill_categories: Vec<SkillCategory>,
    pub achievements: Vec<String>,
    pub contact: ContactSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub path: String,
    pub download_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    GitHub,
    Gfg,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
            Self::Gfg => "GeeksforGeeks",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Self::LinkedIn => Icon::LinkedIn,
            Self::GitHub => Icon::GitHub,
            Self::Gfg => Icon::Code,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub image: String,
    pub description: String,
    pub tags: Vec<String>,
    pub live: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub skills: Vec<String>,
    /// Tailwind gradient stops, e.g. `from-blue-400 to-cyan-300`
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSettings {
    pub endpoint: String,
    pub access_key: String,
}

impl Profile {
    /// Reads and validates the embedded `profile.json`.
    pub fn load() -> Result<Self, ProfileError> {
        let file = Content::get(PROFILE_FILE)
            .ok_or_else(|| ProfileError::NotFound(PROFILE_FILE.to_string()))?;
        Self::from_json(&file.data)?.with_access_key(option_env!("PORTFOLIO_FORM_ACCESS_KEY"))
    }

    /// Replaces the form access key when an override is given.
    pub fn with_access_key(mut self, key: Option<&str>) -> Result<Self, ProfileError> {
        if let Some(key) = key {
            self.contact.access_key = key.to_string();
            self.validate()?;
        }
        Ok(self)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ProfileError> {
        let profile: Profile =
            serde_json::from_slice(data).map_err(|e| ProfileError::ParseError(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.contact.endpoint.trim().is_empty() {
            return Err(ProfileError::MissingContact("endpoint"));
        }
        if self.contact.access_key.trim().is_empty() {
            return Err(ProfileError::MissingContact("access key"));
        }
        if self.projects.iter().any(|p| p.title.trim().is_empty()) {
            return Err(ProfileError::EmptyTitle("project"));
        }
        if self
            .skill_categories
            .iter()
            .any(|c| c.title.trim().is_empty())
        {
            return Err(ProfileError::EmptyTitle("skill category"));
        }

        unique_keys("project", self.projects.iter().map(|p| p.title.as_str()))?;
        unique_keys(
            "skill category",
            self.skill_categories.iter().map(|c| c.title.as_str()),
        )?;
        unique_keys(
            "social platform",
            self.social.iter().map(|s| s.platform.label()),
        )?;
        for project in &self.projects {
            unique_keys("project tag", project.tags.iter().map(String::as_str))?;
        }
        for category in &self.skill_categories {
            unique_keys("skill", category.skills.iter().map(String::as_str))?;
        }
        Ok(())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

fn unique_keys<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), ProfileError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ProfileError::DuplicateKey {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_json() -> serde_json::Value {
        let file = Content::get(PROFILE_FILE).expect("profile.json should be embedded");
        serde_json::from_slice(&file.data).expect("profile.json should be valid json")
    }

    fn with_edit(edit: impl FnOnce(&mut serde_json::Value)) -> Result<Profile, ProfileError> {
        let mut json = embedded_json();
        edit(&mut json);
        Profile::from_json(json.to_string().as_bytes())
    }

    #[test]
    fn test_embedded_profile_loads() {
        let profile = Profile::load().expect("embedded profile should load");
        assert_eq!(profile.name, "Rohith Perisetti");
        assert_eq!(profile.role, "Web Developer");
        assert_eq!(profile.mailto(), "mailto:rohithperisetti4@gmail.com");
        assert_eq!(profile.resume.path, "/resume.pdf");
        assert_eq!(profile.resume.download_name, "Rohith_Resume.pdf");
        assert_eq!(profile.education.degree, "B.Tech - CSE");
        assert_eq!(profile.achievements.len(), 4);
    }

    #[test]
    fn test_display_order_preserved() {
        let profile = profile();
        let titles = profile
            .projects
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["E-Commerce Website", "Weather Website", "Food Delivery UI"]
        );

        let categories = profile
            .skill_categories
            .iter()
            .map(|c| (c.title.as_str(), c.icon))
            .collect::<Vec<_>>();
        assert_eq!(
            categories,
            vec![
                ("Frontend", Icon::Code),
                ("Backend", Icon::Database),
                ("Programming", Icon::Terminal),
                ("Tools", Icon::Layers),
            ]
        );

        let platforms = profile
            .social
            .iter()
            .map(|s| s.platform)
            .collect::<Vec<_>>();
        assert_eq!(
            platforms,
            vec![Platform::LinkedIn, Platform::GitHub, Platform::Gfg]
        );
        assert_eq!(profile.achievements[0], "Solved 150+ Problems on GFG");
    }

    #[test]
    fn test_empty_title_rejected() {
        let res = with_edit(|json| json["projects"][1]["title"] = "  ".into());
        assert_eq!(res.unwrap_err(), ProfileError::EmptyTitle("project"));

        let res = with_edit(|json| json["skill_categories"][0]["title"] = "".into());
        assert_eq!(res.unwrap_err(), ProfileError::EmptyTitle("skill category"));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let res = with_edit(|json| json["projects"][2]["title"] = "Weather Website".into());
        assert_eq!(
            res.unwrap_err(),
            ProfileError::DuplicateKey {
                kind: "project",
                key: "Weather Website".to_string()
            }
        );

        let res = with_edit(|json| json["skill_categories"][3]["skills"][1] = "Git".into());
        assert!(matches!(
            res.unwrap_err(),
            ProfileError::DuplicateKey { kind: "skill", .. }
        ));

        let res = with_edit(|json| json["social"][2]["platform"] = "github".into());
        assert!(matches!(
            res.unwrap_err(),
            ProfileError::DuplicateKey {
                kind: "social platform",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_contact_settings_rejected() {
        let res = with_edit(|json| json["contact"]["access_key"] = "".into());
        assert_eq!(res.unwrap_err(), ProfileError::MissingContact("access key"));

        let res = with_edit(|json| json["contact"]["endpoint"] = " ".into());
        assert_eq!(res.unwrap_err(), ProfileError::MissingContact("endpoint"));
    }

    #[test]
    fn test_access_key_override() {
        let base = with_edit(|_| {}).expect("embedded profile should parse");
        let original = base.contact.access_key.clone();

        let kept = base.clone().with_access_key(None).unwrap();
        assert_eq!(kept.contact.access_key, original);

        let replaced = base.clone().with_access_key(Some("build-time-key")).unwrap();
        assert_eq!(replaced.contact.access_key, "build-time-key");
        assert_eq!(replaced.contact.endpoint, base.contact.endpoint);

        let err = base.with_access_key(Some("")).unwrap_err();
        assert_eq!(err, ProfileError::MissingContact("access key"));
    }

    #[test]
    fn test_resume_is_served_from_public() {
        let resume = &profile().resume;
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(resume.path.trim_start_matches('/'));
        let bytes = std::fs::read(&path).expect("resume should exist under public/");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_malformed_content() {
        let err = Profile::from_json(b"{\"name\": 42}").unwrap_err();
        assert!(matches!(err, ProfileError::ParseError(_)));

        let res = with_edit(|json| json["social"][0]["platform"] = "myspace".into());
        assert!(matches!(res.unwrap_err(), ProfileError::ParseError(_)));
    }
}
