use crate::page::section::SectionId;

/// Color scheme, applied as a top-level class switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light scheme (no class).
    #[default]
    Light,
    /// Dark scheme (`dark` class on the root element).
    Dark,
}

impl Theme {
    /// The other scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Root class to apply, if any.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }
}

/// One entry of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Target section.
    pub section: SectionId,
    /// Display label.
    pub label: &'static str,
    /// Whether the item is highlighted.
    pub active: bool,
}

/// Navigation bar state: mobile menu and theme.
#[derive(Clone, Debug, Default)]
pub struct Navigation {
    menu_open: bool,
    theme: Theme,
}

impl Navigation {
    /// Closed menu, light theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the mobile menu overlay is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Open or close the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and return the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Navigation items in section order, with `active` highlighted.
    pub fn items(&self, active: SectionId) -> Vec<NavItem> {
        SectionId::ALL
            .into_iter()
            .map(|section| NavItem {
                section,
                label: section.label(),
                active: section == active,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/nav.rs"]
mod tests;
