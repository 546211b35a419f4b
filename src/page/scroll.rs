use std::collections::BTreeMap;

use crate::{
    config::ScrollConfig,
    foundation::core::Band,
    foundation::error::{FolioError, FolioResult},
    page::{
        listeners::{EventKind, ListenerId, Listeners},
        nav::Navigation,
        section::SectionId,
    },
};

/// Source of section anchor positions in document coordinates.
pub trait SectionLayout {
    /// Band covered by `section`, or `None` when its anchor is missing.
    fn band(&self, section: SectionId) -> Option<Band>;

    /// Document top of the `index`-th card inside `section`.
    fn card_top(&self, _section: SectionId, _index: usize) -> Option<f64> {
        None
    }
}

/// Measured section bands.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PageLayout {
    bands: BTreeMap<SectionId, Band>,
    #[serde(skip)]
    cards: BTreeMap<(SectionId, usize), f64>,
}

impl PageLayout {
    /// Empty layout (no anchors).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) a section's band.
    pub fn insert(&mut self, section: SectionId, band: Band) {
        self.bands.insert(section, band);
    }

    /// Builder form of [`PageLayout::insert`].
    pub fn with(mut self, section: SectionId, band: Band) -> Self {
        self.insert(section, band);
        self
    }

    /// Record the document top of a card.
    pub fn with_card(mut self, section: SectionId, index: usize, top: f64) -> Self {
        self.cards.insert((section, index), top);
        self
    }

    /// Parse a layout from JSON (`{"hero": {"top": 0, "bottom": 500}, ...}`).
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse layout JSON: {e}")))
    }
}

impl SectionLayout for PageLayout {
    fn band(&self, section: SectionId) -> Option<Band> {
        self.bands.get(&section).copied()
    }

    fn card_top(&self, section: SectionId, index: usize) -> Option<f64> {
        self.cards.get(&(section, index)).copied()
    }
}

/// How a programmatic scroll should move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated scroll.
    Smooth,
    /// Jump.
    Instant,
}

/// Scroll the host should perform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Document offset to bring to the top of the viewport.
    pub target_y: f64,
    /// Scroll animation.
    pub behavior: ScrollBehavior,
}

/// Derives the active section from the scroll offset.
#[derive(Debug)]
pub struct ScrollTracker {
    lookahead: f64,
    active: SectionId,
    listener: Option<ListenerId>,
}

impl ScrollTracker {
    /// Tracker starting on the hero section.
    pub fn new(cfg: &ScrollConfig) -> Self {
        Self {
            lookahead: cfg.lookahead,
            active: SectionId::Hero,
            listener: None,
        }
    }

    /// Currently active section.
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Start listening to scroll events. Idempotent.
    pub fn attach(&mut self, listeners: &mut Listeners) {
        if self.listener.is_none() {
            self.listener = Some(listeners.add(EventKind::Scroll));
        }
    }

    /// Stop listening. Idempotent.
    pub fn detach(&mut self, listeners: &mut Listeners) {
        if let Some(id) = self.listener.take() {
            listeners.remove(id);
        }
    }

    /// Return `true` while attached.
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Re-derive the active section for scroll offset `y`.
    ///
    /// The first section (in document order) whose band contains `y + lookahead` wins. Sections
    /// without an anchor are skipped; when nothing matches the previous section stays active.
    pub fn sample(&mut self, y: f64, layout: &impl SectionLayout) -> SectionId {
        let line = y + self.lookahead;
        if let Some(hit) = SectionId::ALL
            .into_iter()
            .find(|s| layout.band(*s).is_some_and(|b| b.contains(line)))
        {
            if hit != self.active {
                tracing::debug!(from = %self.active, to = %hit, "active section changed");
            }
            self.active = hit;
        }
        self.active
    }

    /// Smooth-scroll request for `section`. Always closes the mobile menu.
    pub fn scroll_to(
        &self,
        section: SectionId,
        layout: &impl SectionLayout,
        nav: &mut Navigation,
    ) -> Option<ScrollRequest> {
        nav.close_menu();
        layout.band(section).map(|b| ScrollRequest {
            target_y: b.top,
            behavior: ScrollBehavior::Smooth,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/scroll.rs"]
mod tests;
