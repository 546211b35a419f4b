use crate::catalog::model::{Catalog, Category, Project, Subcategory, SubcategoryInfo};
use crate::foundation::error::{FolioError, FolioResult};
use std::str::FromStr;

/// Category tab selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every project.
    #[default]
    All,
    /// Projects in one category.
    Only(Category),
}

/// Subcategory chip selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubcategoryFilter {
    /// Every subcategory of the selected category.
    #[default]
    All,
    /// One subcategory.
    Only(Subcategory),
}

impl FromStr for CategoryFilter {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

impl FromStr for SubcategoryFilter {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

/// Current gallery filter.
///
/// Fields are private so the pair can only change through [`Selection::select_category`] and
/// [`Selection::select_subcategory`], which keep the subcategory scoped to the category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    category: CategoryFilter,
    subcategory: SubcategoryFilter,
}

impl Selection {
    /// `(All, All)`.
    pub fn all() -> Self {
        Self::default()
    }

    /// Selected category.
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Selected subcategory.
    pub fn subcategory(&self) -> SubcategoryFilter {
        self.subcategory
    }

    /// Switch category. The subcategory resets to `All` in the same step.
    pub fn select_category(&mut self, category: CategoryFilter) {
        *self = Self {
            category,
            subcategory: SubcategoryFilter::All,
        };
    }

    /// Switch subcategory within the selected category.
    ///
    /// Fails, leaving the selection untouched, when no category is selected or the subcategory
    /// belongs to another category.
    pub fn select_subcategory(&mut self, subcategory: SubcategoryFilter) -> FolioResult<()> {
        if let SubcategoryFilter::Only(sub) = subcategory {
            match self.category {
                CategoryFilter::All => {
                    return Err(FolioError::validation(format!(
                        "subcategory '{sub}' needs a category to be selected first"
                    )));
                }
                CategoryFilter::Only(cat) if sub.category() != cat => {
                    return Err(FolioError::validation(format!(
                        "subcategory '{sub}' is not part of category '{cat}'"
                    )));
                }
                CategoryFilter::Only(_) => {}
            }
        }
        self.subcategory = subcategory;
        Ok(())
    }

    /// Return `true` when `project` passes this filter.
    pub fn matches(&self, project: &Project) -> bool {
        match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => {
                project.category == cat
                    && match self.subcategory {
                        SubcategoryFilter::All => true,
                        SubcategoryFilter::Only(sub) => project.subcategory == sub,
                    }
            }
        }
    }
}

/// Projects passing `selection`, in catalog order.
pub fn visible_projects<'a>(projects: &'a [Project], selection: &Selection) -> Vec<&'a Project> {
    projects.iter().filter(|p| selection.matches(p)).collect()
}

/// What the project grid renders.
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryView<'a> {
    /// At least one project matched.
    Projects(Vec<&'a Project>),
    /// Nothing matched; the grid shows an explicit empty state.
    Empty {
        /// Category that produced no results.
        category: CategoryFilter,
        /// Subcategory that produced no results.
        subcategory: SubcategoryFilter,
    },
}

impl GalleryView<'_> {
    /// Number of visible projects.
    pub fn len(&self) -> usize {
        match self {
            Self::Projects(p) => p.len(),
            Self::Empty { .. } => 0,
        }
    }

    /// Return `true` for the empty state.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Filterable project gallery state.
#[derive(Clone, Debug, Default)]
pub struct ProjectGallery {
    selection: Selection,
}

impl ProjectGallery {
    /// Gallery showing every project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Switch category (resets the subcategory).
    pub fn select_category(&mut self, category: CategoryFilter) {
        tracing::debug!(?category, "gallery category selected");
        self.selection.select_category(category);
    }

    /// Switch subcategory.
    pub fn select_subcategory(&mut self, subcategory: SubcategoryFilter) -> FolioResult<()> {
        self.selection.select_subcategory(subcategory)
    }

    /// Derive the grid contents from the catalog.
    pub fn view<'a>(&self, catalog: &'a Catalog) -> GalleryView<'a> {
        let visible = visible_projects(&catalog.projects, &self.selection);
        if visible.is_empty() {
            GalleryView::Empty {
                category: self.selection.category(),
                subcategory: self.selection.subcategory(),
            }
        } else {
            GalleryView::Projects(visible)
        }
    }

    /// Subcategory chips for the selected category; empty while showing everything.
    pub fn subcategory_options<'a>(&self, catalog: &'a Catalog) -> &'a [SubcategoryInfo] {
        match self.selection.category() {
            CategoryFilter::All => &[],
            CategoryFilter::Only(cat) => catalog
                .category_info(cat)
                .map(|c| c.subcategories.as_slice())
                .unwrap_or(&[]),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/filter.rs"]
mod tests;
