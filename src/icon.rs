use serde::Deserialize;

/// Stroke icons drawn on a 24x24 grid.
///
/// Each icon is a list of SVG path strings; circles and ellipses are
/// written as pairs of arcs so every icon renders as plain `<path>`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Code,
    Database,
    Terminal,
    Layers,
    GitHub,
    LinkedIn,
    Sun,
    Moon,
    Menu,
    Close,
    Download,
    User,
    GraduationCap,
    Send,
}

impl Icon {
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Self::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Self::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                "M3 5V19A9 3 0 0 0 21 19V5",
                "M3 12A9 3 0 0 0 21 12",
            ],
            Self::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
            Self::Layers => &[
                "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            Self::GitHub => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::LinkedIn => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m7 10 5 5 5-5",
                "M12 15V3",
            ],
            Self::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            ],
            Self::GraduationCap => &["M22 10v6", "M2 10l10-5 10 5-10 5z", "M6 12v5c3 3 9 3 12 0v-5"],
            Self::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
        }
    }

    /// Accessible name for icon-only controls.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Database => "Database",
            Self::Terminal => "Terminal",
            Self::Layers => "Layers",
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Sun => "Switch to light mode",
            Self::Moon => "Switch to dark mode",
            Self::Menu => "Open menu",
            Self::Close => "Close menu",
            Self::Download => "Download",
            Self::User => "Profile",
            Self::GraduationCap => "Education",
            Self::Send => "Send",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_icons_deserialize_lowercase() {
        let icons: Vec<Icon> =
            serde_json::from_str(r#"["code", "database", "terminal", "layers"]"#).unwrap();
        assert_eq!(
            icons,
            vec![Icon::Code, Icon::Database, Icon::Terminal, Icon::Layers]
        );
    }

    #[test]
    fn test_every_icon_has_paths() {
        let all = [
            Icon::Code,
            Icon::Database,
            Icon::Terminal,
            Icon::Layers,
            Icon::GitHub,
            Icon::LinkedIn,
            Icon::Sun,
            Icon::Moon,
            Icon::Menu,
            Icon::Close,
            Icon::Download,
            Icon::User,
            Icon::GraduationCap,
            Icon::Send,
        ];
        for icon in all {
            assert!(!icon.paths().is_empty(), "{icon:?} has no paths");
            assert!(icon.paths().iter().all(|p| p.starts_with(['M', 'm'])));
        }
    }
}
