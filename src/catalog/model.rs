use crate::foundation::core::Rgb8;
use crate::foundation::error::{FolioError, FolioResult};
use std::str::FromStr;

/// Top-level project classification.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Sites and applications.
    WebDevelopment,
    /// Campaigns, SEO and content work.
    DigitalMarketing,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 2] = [Self::WebDevelopment, Self::DigitalMarketing];

    /// Stable kebab-case id.
    pub fn id(self) -> &'static str {
        match self {
            Self::WebDevelopment => "web-development",
            Self::DigitalMarketing => "digital-marketing",
        }
    }
}

impl FromStr for Category {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| FolioError::validation(format!("unknown category '{s}'")))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Second-level classification, always scoped to exactly one [`Category`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Subcategory {
    /// Single-page React applications.
    ReactApps,
    /// Hand-built static and multi-page sites.
    Websites,
    /// WordPress builds and themes.
    #[serde(rename = "wordpress")]
    WordPress,
    /// Conversion-focused landing pages.
    LandingPages,
    /// Search optimization and content.
    Seo,
    /// Paid search and social campaigns.
    PaidAds,
    /// Organic social strategy.
    SocialMedia,
    /// Email automation.
    EmailMarketing,
    /// Local listings and maps visibility.
    LocalSeo,
}

impl Subcategory {
    /// Every subcategory, grouped by category.
    pub const ALL: [Self; 9] = [
        Self::ReactApps,
        Self::Websites,
        Self::WordPress,
        Self::LandingPages,
        Self::Seo,
        Self::PaidAds,
        Self::SocialMedia,
        Self::EmailMarketing,
        Self::LocalSeo,
    ];

    /// The category this subcategory belongs to.
    pub fn category(self) -> Category {
        match self {
            Self::ReactApps | Self::Websites | Self::WordPress | Self::LandingPages => {
                Category::WebDevelopment
            }
            Self::Seo
            | Self::PaidAds
            | Self::SocialMedia
            | Self::EmailMarketing
            | Self::LocalSeo => Category::DigitalMarketing,
        }
    }

    /// Stable kebab-case id.
    pub fn id(self) -> &'static str {
        match self {
            Self::ReactApps => "react-apps",
            Self::Websites => "websites",
            Self::WordPress => "wordpress",
            Self::LandingPages => "landing-pages",
            Self::Seo => "seo",
            Self::PaidAds => "paid-ads",
            Self::SocialMedia => "social-media",
            Self::EmailMarketing => "email-marketing",
            Self::LocalSeo => "local-seo",
        }
    }
}

impl FromStr for Subcategory {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| FolioError::validation(format!("unknown subcategory '{s}'")))
    }
}

impl std::fmt::Display for Subcategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Display metadata for a subcategory chip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubcategoryInfo {
    /// Subcategory id.
    pub id: Subcategory,
    /// Display name.
    pub name: String,
    /// Icon reference.
    pub icon: String,
}

/// Display metadata for a category tab.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategoryInfo {
    /// Category id.
    pub id: Category,
    /// Display name.
    pub name: String,
    /// Icon reference.
    pub icon: String,
    /// Accent color.
    pub color: Rgb8,
    /// Subcategories offered under this category, in display order.
    pub subcategories: Vec<SubcategoryInfo>,
}

/// Frame shape of a project video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectRatio {
    /// 16:9.
    Landscape,
    /// 9:16 (reels, shorts).
    Portrait,
    /// 1:1.
    Square,
}

impl AspectRatio {
    /// Width divided by height.
    pub fn ratio(self) -> f64 {
        match self {
            Self::Landscape => 16.0 / 9.0,
            Self::Portrait => 9.0 / 16.0,
            Self::Square => 1.0,
        }
    }
}

/// Which kind of media a project shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video clip.
    Video,
}

/// Project media reference, consumed by URL and never transformed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Media {
    /// Still image.
    Image {
        /// Image URL or path.
        src: String,
    },
    /// Video clip with its frame shape.
    Video {
        /// Video URL or path.
        src: String,
        /// Frame shape.
        aspect: AspectRatio,
    },
}

impl Media {
    /// Media URL or path.
    pub fn src(&self) -> &str {
        match self {
            Self::Image { src } | Self::Video { src, .. } => src,
        }
    }

    /// Media kind tag.
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Image { .. } => MediaKind::Image,
            Self::Video { .. } => MediaKind::Video,
        }
    }
}

/// One gallery entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    /// Card title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Tools and technologies, in display order.
    pub tools: Vec<String>,
    /// Card media.
    pub media: Media,
    /// External link.
    pub link: String,
    /// Category.
    pub category: Category,
    /// Subcategory (must belong to `category`).
    pub subcategory: Subcategory,
}

impl Project {
    /// Media kind of this project.
    pub fn media_kind(&self) -> MediaKind {
        self.media.kind()
    }
}

/// Skill table grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillGroup {
    /// Frontend development.
    Frontend,
    /// Marketing tools.
    Marketing,
    /// Strategy and soft skills.
    Soft,
}

/// One proficiency bar.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Proficiency percentage in `0..=100`.
    pub level: u8,
    /// Icon glyph.
    pub icon: String,
}

/// Skills shown under one heading.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkillSet {
    /// Group heading.
    pub group: SkillGroup,
    /// Skills in display order.
    pub skills: Vec<Skill>,
}

/// A certification card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Certification {
    /// Certificate name.
    pub name: String,
    /// Issuing organisation.
    pub issuer: String,
    /// Year awarded.
    pub year: u16,
}

/// Hero and about-section content.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Hero headline.
    pub headline: String,
    /// Hero tagline.
    pub tagline: String,
    /// About-section paragraph.
    pub about: String,
    /// Modules listed in the about section.
    pub modules: Vec<String>,
    /// Profile photo URL or path.
    pub photo: String,
    /// Downloadable resume path.
    pub resume: String,
    /// Contact email shown next to the form.
    pub email: String,
}

/// Every static table rendered by the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    /// Hero/about content.
    pub profile: Profile,
    /// Category tabs with their subcategory chips.
    pub categories: Vec<CategoryInfo>,
    /// Projects in display order.
    pub projects: Vec<Project>,
    /// Skill tables.
    pub skills: Vec<SkillSet>,
    /// Certification cards.
    pub certifications: Vec<Certification>,
}

impl Catalog {
    /// Parse a catalog from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse catalog JSON: {e}")))
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            FolioError::validation(format!("open catalog JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Metadata for `category`, if the catalog lists it.
    pub fn category_info(&self, category: Category) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.id == category)
    }

    /// Check the authoring-time invariants.
    ///
    /// Every project's subcategory must belong to its category and be offered by that category's
    /// info; categories are listed once; skill levels are percentages.
    #[tracing::instrument(skip(self))]
    pub fn validate(&self) -> FolioResult<()> {
        for (i, info) in self.categories.iter().enumerate() {
            if self.categories[..i].iter().any(|c| c.id == info.id) {
                return Err(FolioError::catalog(format!(
                    "category '{}' is listed more than once",
                    info.id
                )));
            }
            if info.name.trim().is_empty() {
                return Err(FolioError::catalog(format!(
                    "category '{}' has an empty name",
                    info.id
                )));
            }
            for (j, sub) in info.subcategories.iter().enumerate() {
                if sub.id.category() != info.id {
                    return Err(FolioError::catalog(format!(
                        "subcategory '{}' belongs to '{}', not '{}'",
                        sub.id,
                        sub.id.category(),
                        info.id
                    )));
                }
                if info.subcategories[..j].iter().any(|s| s.id == sub.id) {
                    return Err(FolioError::catalog(format!(
                        "subcategory '{}' is listed more than once under '{}'",
                        sub.id, info.id
                    )));
                }
            }
        }

        for p in &self.projects {
            if p.title.trim().is_empty() {
                return Err(FolioError::catalog("project title must be non-empty"));
            }
            if p.link.trim().is_empty() {
                return Err(FolioError::catalog(format!(
                    "project '{}' has an empty link",
                    p.title
                )));
            }
            if p.subcategory.category() != p.category {
                return Err(FolioError::catalog(format!(
                    "project '{}': subcategory '{}' is not part of category '{}'",
                    p.title, p.subcategory, p.category
                )));
            }
            let info = self.category_info(p.category).ok_or_else(|| {
                FolioError::catalog(format!(
                    "project '{}': category '{}' is not listed",
                    p.title, p.category
                ))
            })?;
            if !info.subcategories.iter().any(|s| s.id == p.subcategory) {
                return Err(FolioError::catalog(format!(
                    "project '{}': subcategory '{}' is not offered under '{}'",
                    p.title, p.subcategory, p.category
                )));
            }
        }

        for set in &self.skills {
            if let Some(s) = set.skills.iter().find(|s| s.level > 100) {
                return Err(FolioError::catalog(format!(
                    "skill '{}' has level {} (> 100)",
                    s.name, s.level
                )));
            }
        }

        tracing::info!(
            projects = self.projects.len(),
            categories = self.categories.len(),
            "catalog validated"
        );
        Ok(())
    }

    /// Number of skills across every group.
    pub fn total_skills(&self) -> usize {
        self.skills.iter().map(|s| s.skills.len()).sum()
    }

    /// Skills in one group.
    pub fn skills_in(&self, group: SkillGroup) -> &[Skill] {
        self.skills
            .iter()
            .find(|s| s.group == group)
            .map(|s| s.skills.as_slice())
            .unwrap_or(&[])
    }

    /// Mean proficiency across every skill, rounded to a whole percent. `0` when empty.
    pub fn average_level(&self) -> u8 {
        let total = self.total_skills();
        if total == 0 {
            return 0;
        }
        let sum: u32 = self
            .skills
            .iter()
            .flat_map(|s| s.skills.iter())
            .map(|s| u32::from(s.level))
            .sum();
        (f64::from(sum) / total as f64).round() as u8
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
