//! Page-shell UI state and the theme-to-style resolution.
//!
//! Everything here is plain data so it can be driven by signals in the
//! browser and exercised directly in tests.

use crate::icon::Icon;

/// Class applied to `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Marker class for the document root, if any.
    pub fn root_class(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_CLASS)
    }

    /// The toggle shows where it will take you: a sun in the dark, a moon in the light.
    pub fn toggle_icon(self) -> Icon {
        match self {
            Self::Dark => Icon::Sun,
            Self::Light => Icon::Moon,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK_PALETTE,
            Self::Light => &LIGHT_PALETTE,
        }
    }
}

/// Theme-dependent Tailwind classes, one field per styled surface.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub nav: &'static str,
    pub mobile_menu: &'static str,
    pub toggle: &'static str,
    pub blob_primary: &'static str,
    pub blob_secondary: &'static str,
    pub muted_text: &'static str,
    pub body_text: &'static str,
    pub outline_button: &'static str,
    pub social_button: &'static str,
    pub band: &'static str,
    pub card: &'static str,
    pub chip: &'static str,
    pub panel: &'static str,
    pub form_card: &'static str,
    pub input: &'static str,
    pub footer: &'static str,
}

pub static DARK_PALETTE: Palette = Palette {
    page: "bg-slate-950 text-white",
    nav: "bg-slate-900/80 border-slate-800",
    mobile_menu: "bg-slate-900 border-slate-800",
    toggle: "bg-slate-800 text-yellow-400",
    blob_primary: "bg-purple-600",
    blob_secondary: "bg-blue-600",
    muted_text: "text-slate-400",
    body_text: "text-slate-300",
    outline_button: "border-slate-700 hover:bg-slate-800",
    social_button: "bg-slate-800 hover:bg-blue-600 text-white",
    band: "bg-slate-900/50",
    card: "bg-slate-950 border-slate-800",
    chip: "bg-slate-900 border-slate-700",
    panel: "bg-slate-950",
    form_card: "bg-slate-950 border-slate-800",
    input: "bg-slate-900 border-slate-800 focus:border-blue-500",
    footer: "bg-slate-950 border-slate-900 text-slate-600",
};

pub static LIGHT_PALETTE: Palette = Palette {
    page: "bg-gray-50 text-gray-900",
    nav: "bg-white/80 border-gray-200",
    mobile_menu: "bg-white border-gray-200",
    toggle: "bg-white text-slate-900",
    blob_primary: "bg-purple-300",
    blob_secondary: "bg-blue-300",
    muted_text: "text-slate-600",
    body_text: "text-slate-700",
    outline_button: "border-gray-300 hover:bg-gray-100",
    social_button: "bg-white shadow-md hover:bg-blue-500 hover:text-white text-slate-700",
    band: "bg-white",
    card: "bg-white border-gray-100 shadow-lg",
    chip: "bg-gray-50",
    panel: "bg-white shadow-lg",
    form_card: "bg-white border-gray-100 shadow-xl",
    input: "bg-gray-50 border-gray-200 focus:border-blue-500",
    footer: "bg-white border-gray-200 text-gray-500",
};

/// Mobile navigation visibility. The desktop menu has no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn button_icon(self) -> Icon {
        match self {
            Self::Closed => Icon::Menu,
            Self::Open => Icon::Close,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub theme: Theme,
    pub menu: MenuState,
}

impl UiState {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
    }

    /// A navigation link was followed.
    pub fn follow_link(&mut self) {
        self.menu = MenuState::Closed;
    }
}

/// Load state of an image that has a placeholder to fall back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoad {
    #[default]
    Pending,
    Failed,
}

impl ImageLoad {
    pub fn fail(&mut self) {
        *self = Self::Failed;
    }

    pub fn image_visible(self) -> bool {
        self == Self::Pending
    }

    pub fn fallback_visible(self) -> bool {
        self == Self::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let ui = UiState::default();
        assert_eq!(ui.theme, Theme::Dark);
        assert_eq!(ui.theme.root_class(), Some("dark"));
        assert_eq!(ui.menu, MenuState::Closed);
        assert!(!ui.menu.is_open());
        assert_eq!(ui.menu.button_icon(), Icon::Menu);
    }

    #[test]
    fn test_single_toggle_switches_to_light() {
        let mut ui = UiState::default();
        assert_eq!(ui.theme.toggle_icon(), Icon::Sun);
        ui.toggle_theme();
        assert_eq!(ui.theme, Theme::Light);
        assert_eq!(ui.theme.root_class(), None);
        assert_eq!(ui.theme.toggle_icon(), Icon::Moon);
        assert_eq!(ui.theme.palette(), &LIGHT_PALETTE);
    }

    #[test]
    fn test_double_toggle_restores_root_class() {
        let mut ui = UiState::default();
        let initial = ui.theme.root_class();
        ui.toggle_theme();
        ui.toggle_theme();
        assert_eq!(ui.theme.root_class(), initial);
        assert_eq!(ui.theme.palette(), &DARK_PALETTE);
    }

    #[test]
    fn test_menu_toggle_parity() {
        for presses in 0..8 {
            let mut ui = UiState::default();
            for _ in 0..presses {
                ui.toggle_menu();
            }
            assert_eq!(ui.menu.is_open(), presses % 2 == 1, "{presses} presses");
        }
    }

    #[test]
    fn test_following_link_closes_menu() {
        let mut ui = UiState::default();
        ui.toggle_menu();
        assert_eq!(ui.menu.button_icon(), Icon::Close);
        ui.follow_link();
        assert_eq!(ui.menu, MenuState::Closed);

        // already closed stays closed
        ui.follow_link();
        assert_eq!(ui.menu, MenuState::Closed);
    }

    #[test]
    fn test_menu_and_theme_are_independent() {
        let mut ui = UiState::default();
        ui.toggle_menu();
        ui.toggle_theme();
        ui.follow_link();
        assert_eq!(ui.theme, Theme::Light);
        assert_eq!(ui.menu, MenuState::Closed);
    }

    #[test]
    fn test_palettes_differ_per_theme() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        assert_ne!(dark.page, light.page);
        assert_ne!(dark.card, light.card);
        assert_ne!(dark.toggle, light.toggle);
    }

    #[test]
    fn test_image_failure_swaps_to_fallback() {
        let mut avatar = ImageLoad::default();
        assert!(avatar.image_visible());
        assert!(!avatar.fallback_visible());
        avatar.fail();
        assert!(!avatar.image_visible());
        assert!(avatar.fallback_visible());
    }
}
