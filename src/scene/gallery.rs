use crate::{
    catalog::model::Catalog,
    config::SceneConfig,
    foundation::{
        core::{Rgb8, Vec3},
        math::lerp,
    },
};

/// Panel size (width, height, depth).
pub const CARD_SIZE: Vec3 = Vec3::new(2.0, 2.5, 0.2);

/// One project panel of the gallery scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GalleryCard {
    /// Stable id reported on click.
    pub id: String,
    /// Caption.
    pub title: String,
    /// Panel color.
    pub color: Rgb8,
    /// Position on the gallery circle.
    pub position: Vec3,
    /// Accumulated rotation (radians).
    pub rotation: Vec3,
    /// Current uniform scale.
    pub scale: f64,
}

/// Project panels arranged on a circle around the origin.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gallery {
    cards: Vec<GalleryCard>,
    hovered: Option<usize>,
    active: Option<usize>,
}

impl Gallery {
    /// Lay `(id, title, color)` entries out evenly on a circle of `radius`.
    pub fn arrange(entries: impl IntoIterator<Item = (String, String, Rgb8)>, radius: f64) -> Self {
        let entries: Vec<_> = entries.into_iter().collect();
        let n = entries.len().max(1) as f64;
        let cards = entries
            .into_iter()
            .enumerate()
            .map(|(i, (id, title, color))| {
                let angle = i as f64 / n * std::f64::consts::TAU;
                GalleryCard {
                    id,
                    title,
                    color,
                    position: Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius),
                    rotation: Vec3::ZERO,
                    scale: 1.0,
                }
            })
            .collect();
        Self {
            cards,
            hovered: None,
            active: None,
        }
    }

    /// One card per catalog project, colored by its category.
    pub fn from_catalog(catalog: &Catalog, radius: f64) -> Self {
        let entries = catalog.projects.iter().enumerate().map(|(i, p)| {
            let color = catalog
                .category_info(p.category)
                .map_or(Rgb8::new(0xff, 0xff, 0xff), |c| c.color);
            (format!("project-{i}"), p.title.clone(), color)
        });
        Self::arrange(entries, radius)
    }

    /// Cards in layout order.
    pub fn cards(&self) -> &[GalleryCard] {
        &self.cards
    }

    /// Set (or clear) the hovered card. Out-of-range indices clear it.
    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|i| *i < self.cards.len());
    }

    /// Make `index` the active card and return its id.
    pub fn click(&mut self, index: usize) -> Option<&str> {
        let card = self.cards.get(index)?;
        self.active = Some(index);
        Some(card.id.as_str())
    }

    /// Id of the active card.
    pub fn active_id(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.cards.get(i))
            .map(|c| c.id.as_str())
    }

    /// Scale a card is easing toward: hover beats active beats rest.
    pub fn target_scale(&self, index: usize, cfg: &SceneConfig) -> f64 {
        if self.hovered == Some(index) {
            cfg.card_hover_scale
        } else if self.active == Some(index) {
            cfg.card_active_scale
        } else {
            1.0
        }
    }

    /// Emissive intensity for a card's current state.
    pub fn emissive(&self, index: usize) -> f64 {
        if self.hovered == Some(index) {
            0.4
        } else if self.active == Some(index) {
            0.3
        } else {
            0.1
        }
    }

    pub(crate) fn step(&mut self, cfg: &SceneConfig) {
        let targets: Vec<f64> = (0..self.cards.len())
            .map(|i| self.target_scale(i, cfg))
            .collect();
        for (card, target) in self.cards.iter_mut().zip(targets) {
            card.rotation.y += cfg.card_spin;
            card.scale = lerp(card.scale, target, cfg.card_scale_lerp);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/gallery.rs"]
mod tests;
