use crate::{
    animation::ease::Ease,
    foundation::error::{FolioError, FolioResult},
};

/// Environment variable overriding [`ContactConfig::endpoint`].
pub const ENV_FUNCTIONS_URL: &str = "FOLIO_FUNCTIONS_URL";
/// Environment variable overriding [`ContactConfig::api_key`].
pub const ENV_FUNCTIONS_KEY: &str = "FOLIO_FUNCTIONS_KEY";

/// Every tunable of the page, loaded from JSON. Missing fields take their defaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Active-section tracking.
    pub scroll: ScrollConfig,
    /// Scroll reveal animations.
    pub reveal: RevealConfig,
    /// Cursor indicator.
    pub cursor: CursorConfig,
    /// Floating icon constellation.
    pub floating: FloatingConfig,
    /// Content parallax.
    pub parallax: ParallaxConfig,
    /// Background and gallery scenes.
    pub scene: SceneConfig,
    /// Loading screen.
    pub gate: GateConfig,
    /// Contact function endpoint and notices.
    pub contact: ContactConfig,
}

/// Active-section tracking.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Distance added to the scroll offset before matching section bands.
    pub lookahead: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { lookahead: 100.0 }
    }
}

/// Scroll reveal animations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Viewport fraction at which a section's top edge triggers its entrance.
    pub section_start: f64,
    /// Viewport fraction at which a card's top edge triggers its entrance.
    pub card_start: f64,
    /// Initial vertical offset of a hidden section.
    pub section_offset_y: f64,
    /// Initial vertical offset of a hidden card.
    pub card_offset_y: f64,
    /// Section entrance duration (seconds).
    pub section_duration: f64,
    /// Card entrance duration (seconds).
    pub card_duration: f64,
    /// Per-index delay between cards (seconds).
    pub card_stagger: f64,
    /// Initial vertical offset of the hero content.
    pub hero_offset_y: f64,
    /// Hero entrance duration (seconds).
    pub hero_duration: f64,
    /// Easing for every entrance.
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_start: 0.8,
            card_start: 0.7,
            section_offset_y: 50.0,
            card_offset_y: 30.0,
            section_duration: 1.0,
            card_duration: 0.6,
            card_stagger: 0.1,
            hero_offset_y: 30.0,
            hero_duration: 1.0,
            ease: Ease::OutCubic,
        }
    }
}

/// Cursor indicator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Settle time of the outer ring (seconds).
    pub ring_duration: f64,
    /// Settle time of the inner dot (seconds).
    pub dot_duration: f64,
    /// Ring easing.
    pub ring_ease: Ease,
    /// Ring scale while hovering an interactive element.
    pub ring_hover_scale: f64,
    /// Dot scale while hovering an interactive element.
    pub dot_hover_scale: f64,
    /// Duration of the hover scale change (seconds).
    pub hover_duration: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            ring_duration: 0.5,
            dot_duration: 0.1,
            ring_ease: Ease::OutCubic,
            ring_hover_scale: 1.5,
            dot_hover_scale: 0.0,
            hover_duration: 0.3,
        }
    }
}

/// Floating icon constellation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    /// Seed for the per-icon oscillation parameters.
    pub seed: u64,
    /// Pointer sensitivity of the first icon.
    pub base_speed: f64,
    /// Sensitivity added per icon index.
    pub speed_step: f64,
    /// Settle time of the pointer offset (seconds).
    pub follow_duration: f64,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_f10a7,
            base_speed: 0.02,
            speed_step: 0.005,
            follow_duration: 1.0,
        }
    }
}

/// Content parallax.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Default sensitivity for wrapped blocks.
    pub speed: f64,
    /// Settle time (seconds).
    pub duration: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed: 0.05,
            duration: 1.0,
        }
    }
}

/// Background and gallery scenes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of particles in the drifting field.
    pub particle_count: usize,
    /// Edge length of the cube particles are sampled in, centered on the origin.
    pub particle_extent: f64,
    /// Seed for particle sampling.
    pub seed: u64,
    /// Per-frame sphere rotation on x and y (radians).
    pub sphere_spin: f64,
    /// Per-frame particle field rotation on x (radians).
    pub particle_spin_x: f64,
    /// Per-frame particle field rotation on y (radians).
    pub particle_spin_y: f64,
    /// Per-frame gallery card rotation on y (radians).
    pub card_spin: f64,
    /// Fraction of the remaining scale distance covered per frame.
    pub card_scale_lerp: f64,
    /// Card scale target while hovered.
    pub card_hover_scale: f64,
    /// Card scale target while active.
    pub card_active_scale: f64,
    /// Radius of the gallery circle.
    pub gallery_radius: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: 150,
            particle_extent: 15.0,
            seed: 0x0bad_cafe,
            sphere_spin: 0.002,
            particle_spin_x: 0.0001,
            particle_spin_y: 0.0003,
            card_spin: 0.005,
            card_scale_lerp: 0.1,
            card_hover_scale: 1.2,
            card_active_scale: 1.1,
            gallery_radius: 5.0,
        }
    }
}

/// Loading screen.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Progress bar fill time (seconds).
    pub fill_duration: f64,
    /// Loader fade-out time (seconds).
    pub fade_duration: f64,
    /// Text entrance time (seconds).
    pub text_duration: f64,
    /// Peak scale of the text pulse.
    pub pulse_scale: f64,
    /// Duration of one pulse half-cycle (seconds).
    pub pulse_duration: f64,
    /// Extra pulse half-cycles after the first.
    pub pulse_repeats: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            fill_duration: 2.0,
            fade_duration: 0.5,
            text_duration: 0.5,
            pulse_scale: 1.05,
            pulse_duration: 0.5,
            pulse_repeats: 2,
        }
    }
}

/// Contact function endpoint and notices.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Base URL of the function host, e.g. `https://project.example.co`.
    pub endpoint: Option<String>,
    /// Key sent as bearer token and `apikey` header.
    pub api_key: Option<String>,
    /// Lifetime of success/failure notices (seconds).
    pub notice_seconds: f64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            notice_seconds: 5.0,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r).map_err(|e| FolioError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a configuration file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            FolioError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Apply `FOLIO_FUNCTIONS_URL` / `FOLIO_FUNCTIONS_KEY` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|k| std::env::var(k).ok())
    }

    /// Apply overrides looked up through `lookup`. Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());
        if let Some(url) = get(ENV_FUNCTIONS_URL) {
            self.contact.endpoint = Some(url);
        }
        if let Some(key) = get(ENV_FUNCTIONS_KEY) {
            self.contact.api_key = Some(key);
        }
        self
    }

    /// Check numeric ranges.
    pub fn validate(&self) -> FolioResult<()> {
        positive("scroll.lookahead", self.scroll.lookahead, true)?;

        let r = &self.reveal;
        fraction("reveal.section_start", r.section_start)?;
        fraction("reveal.card_start", r.card_start)?;
        positive("reveal.section_offset_y", r.section_offset_y, true)?;
        positive("reveal.card_offset_y", r.card_offset_y, true)?;
        positive("reveal.hero_offset_y", r.hero_offset_y, true)?;
        positive("reveal.section_duration", r.section_duration, false)?;
        positive("reveal.card_duration", r.card_duration, false)?;
        positive("reveal.hero_duration", r.hero_duration, false)?;
        positive("reveal.card_stagger", r.card_stagger, true)?;

        let c = &self.cursor;
        positive("cursor.ring_duration", c.ring_duration, false)?;
        positive("cursor.dot_duration", c.dot_duration, false)?;
        positive("cursor.hover_duration", c.hover_duration, false)?;
        positive("cursor.ring_hover_scale", c.ring_hover_scale, true)?;
        positive("cursor.dot_hover_scale", c.dot_hover_scale, true)?;

        positive("floating.base_speed", self.floating.base_speed, true)?;
        positive("floating.speed_step", self.floating.speed_step, true)?;
        positive("floating.follow_duration", self.floating.follow_duration, false)?;

        positive("parallax.speed", self.parallax.speed, true)?;
        positive("parallax.duration", self.parallax.duration, false)?;

        let s = &self.scene;
        if s.particle_count == 0 {
            return Err(FolioError::validation("scene.particle_count must be > 0"));
        }
        positive("scene.particle_extent", s.particle_extent, false)?;
        fraction("scene.card_scale_lerp", s.card_scale_lerp)?;
        positive("scene.card_hover_scale", s.card_hover_scale, false)?;
        positive("scene.card_active_scale", s.card_active_scale, false)?;
        positive("scene.gallery_radius", s.gallery_radius, false)?;
        for (name, v) in [
            ("scene.sphere_spin", s.sphere_spin),
            ("scene.particle_spin_x", s.particle_spin_x),
            ("scene.particle_spin_y", s.particle_spin_y),
            ("scene.card_spin", s.card_spin),
        ] {
            if !v.is_finite() {
                return Err(FolioError::validation(format!("{name} must be finite")));
            }
        }

        let g = &self.gate;
        positive("gate.fill_duration", g.fill_duration, false)?;
        positive("gate.fade_duration", g.fade_duration, false)?;
        positive("gate.text_duration", g.text_duration, false)?;
        positive("gate.pulse_duration", g.pulse_duration, false)?;
        positive("gate.pulse_scale", g.pulse_scale, false)?;

        positive("contact.notice_seconds", self.contact.notice_seconds, false)?;
        Ok(())
    }
}

fn positive(name: &str, v: f64, allow_zero: bool) -> FolioResult<()> {
    let ok = v.is_finite() && if allow_zero { v >= 0.0 } else { v > 0.0 };
    if ok {
        Ok(())
    } else {
        let bound = if allow_zero { ">= 0" } else { "> 0" };
        Err(FolioError::validation(format!(
            "{name} must be finite and {bound}, got {v}"
        )))
    }
}

fn fraction(name: &str, v: f64) -> FolioResult<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(FolioError::validation(format!(
            "{name} must be in [0, 1], got {v}"
        )))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
