//! View models for the page sections.
//!
//! Each function maps a slice of the profile to an ordered iterator of
//! display units. The iterators borrow the profile and can be recreated on
//! every render.

use crate::icon::Icon;
use crate::profile::{Profile, Project, SkillCategory};

pub const NEW_TAB_TARGET: &str = "_blank";
pub const NEW_TAB_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

pub static NAV_SECTIONS: [Section; 4] = [
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Contact,
];

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Element id, addressable as a URL fragment.
    pub fn id(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// A link that opens in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundLink<'a> {
    pub label: &'static str,
    pub href: &'a str,
}

impl OutboundLink<'_> {
    pub fn target(&self) -> &'static str {
        NEW_TAB_TARGET
    }

    pub fn rel(&self) -> &'static str {
        NEW_TAB_REL
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialButton<'a> {
    pub key: &'static str,
    pub icon: Icon,
    pub link: OutboundLink<'a>,
}

pub fn social_buttons(profile: &Profile) -> impl Iterator<Item = SocialButton<'_>> + '_ {
    profile.social.iter().map(|s| SocialButton {
        key: s.platform.label(),
        icon: s.platform.icon(),
        link: OutboundLink {
            label: s.platform.label(),
            href: &s.url,
        },
    })
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectCard<'a> {
    pub key: &'a str,
    pub project: &'a Project,
    pub live: OutboundLink<'a>,
    pub code: OutboundLink<'a>,
}

impl<'a> ProjectCard<'a> {
    pub fn actions(&self) -> [OutboundLink<'a>; 2] {
        [self.live, self.code]
    }
}

pub fn project_cards(profile: &Profile) -> impl Iterator<Item = ProjectCard<'_>> + '_ {
    profile.projects.iter().map(|p| ProjectCard {
        key: &p.title,
        project: p,
        live: OutboundLink {
            label: "Live",
            href: &p.live,
        },
        code: OutboundLink {
            label: "GitHub",
            href: &p.code,
        },
    })
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCard<'a> {
    pub key: &'a str,
    pub category: &'a SkillCategory,
}

impl SkillCard<'_> {
    pub fn icon_tile_class(&self) -> String {
        format!(
            "w-12 h-12 rounded-lg mb-6 flex items-center justify-center bg-gradient-to-br {} text-white",
            self.category.color
        )
    }
}

pub fn skill_cards(profile: &Profile) -> impl Iterator<Item = SkillCard<'_>> + '_ {
    profile.skill_categories.iter().map(|c| SkillCard {
        key: &c.title,
        category: c,
    })
}

/// Achievements are free text, so they are keyed by position.
pub fn achievements(profile: &Profile) -> impl Iterator<Item = (usize, &str)> + '_ {
    profile
        .achievements
        .iter()
        .enumerate()
        .map(|(i, a)| (i, a.as_str()))
}

pub fn copyright(profile: &Profile, year: &str) -> String {
    format!("© {year} {}. All rights reserved.", profile.name)
}
