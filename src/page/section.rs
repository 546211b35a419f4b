use crate::foundation::error::{FolioError, FolioResult};
use std::str::FromStr;

/// Anchor-addressable region of the page, in document order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Landing banner.
    Hero,
    /// Biography.
    About,
    /// Skill groups.
    Skills,
    /// Filterable project gallery.
    Projects,
    /// Certifications.
    Certifications,
    /// Contact form.
    Contact,
}

impl SectionId {
    /// Every section in document order.
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Certifications,
        Self::Contact,
    ];

    /// DOM anchor id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Contact => "Contact",
        }
    }

    /// Sections that reveal on scroll (everything but the hero).
    pub fn revealed_on_scroll(self) -> bool {
        self != Self::Hero
    }
}

impl FromStr for SectionId {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FolioError::validation(format!("unknown section '{s}'")))
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
