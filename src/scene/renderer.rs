use std::{cell::OnceCell, collections::BTreeSet};

use crate::{
    config::SceneConfig,
    foundation::{
        core::{Rgb8, Vec3},
        error::{FolioError, FolioResult},
        math::Rng64,
    },
    scene::{
        gallery::Gallery,
        model::{Camera, ContextId, Light, ParticleField, Sphere},
    },
};

/// Source of graphics contexts.
///
/// A scene holds exactly one context between `mount` and `unmount`.
pub trait GraphicsDevice {
    /// Acquire a new context.
    fn create_context(&mut self) -> FolioResult<ContextId>;
    /// Release a context. Releasing an unknown context is a no-op.
    fn release_context(&mut self, id: ContextId);
    /// Number of contexts currently held.
    fn live_contexts(&self) -> usize;
}

/// In-memory device used by tests, the CLI and hosts without a GPU.
#[derive(Debug, Default)]
pub struct HeadlessDevice {
    live: BTreeSet<ContextId>,
    next: u64,
    limit: Option<usize>,
}

impl HeadlessDevice {
    /// Device with no context limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Device that refuses to hold more than `limit` contexts at once.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Total contexts ever created.
    pub fn created(&self) -> u64 {
        self.next
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn create_context(&mut self) -> FolioResult<ContextId> {
        if self.limit.is_some_and(|l| self.live.len() >= l) {
            return Err(FolioError::validation(format!(
                "graphics context limit reached ({} live)",
                self.live.len()
            )));
        }
        let id = ContextId(self.next);
        self.next += 1;
        self.live.insert(id);
        Ok(id)
    }

    fn release_context(&mut self, id: ContextId) {
        self.live.remove(&id);
    }

    fn live_contexts(&self) -> usize {
        self.live.len()
    }
}

/// Which scene a renderer draws.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum SceneContent {
    /// Page background: rotating spheres and a particle field.
    Background {
        /// Spheres in draw order.
        spheres: Vec<Sphere>,
    },
    /// Project panels on a circle.
    Gallery(Gallery),
}

/// Serializable view of a scene at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSnapshot {
    /// Frames rendered since mount.
    pub frame: u64,
    /// Whether a context is held.
    pub mounted: bool,
    /// Camera.
    pub camera: Camera,
    /// Lights.
    pub lights: Vec<Light>,
    /// Meshes.
    pub content: SceneContent,
    /// Particle field, when the scene has one and is mounted.
    pub particles: Option<ParticleField>,
}

/// Continuously animated decorative scene.
///
/// Each [`SceneRenderer::frame`] applies fixed per-frame rotation deltas; nothing depends on
/// page interaction. The particle buffer is sampled once per mount and survives any number of
/// further `mount` calls until `unmount`.
#[derive(Debug)]
pub struct SceneRenderer {
    cfg: SceneConfig,
    camera: Camera,
    lights: Vec<Light>,
    content: SceneContent,
    context: Option<ContextId>,
    particles: OnceCell<Vec<Vec3>>,
    particle_rotation: Vec3,
    mounts: u64,
    frame: u64,
}

impl SceneRenderer {
    /// Background scene.
    pub fn background(cfg: &SceneConfig) -> Self {
        let spheres = vec![
            Sphere::glossy(Vec3::new(-3.0, 0.0, 0.0), Rgb8::new(0x3b, 0x82, 0xf6)),
            Sphere::glossy(Vec3::new(3.0, 0.0, -2.0), Rgb8::new(0xa8, 0x55, 0xf7)),
            Sphere::glossy(Vec3::new(0.0, 2.0, -3.0), Rgb8::new(0xec, 0x48, 0x99)),
        ];
        let lights = vec![
            Light::ambient(0.4),
            Light::directional(Vec3::new(10.0, 10.0, 5.0), 0.8),
            Light::point(
                Vec3::new(-10.0, -10.0, -5.0),
                0.4,
                Some(Rgb8::new(0x3b, 0x82, 0xf6)),
            ),
            Light::point(
                Vec3::new(10.0, 10.0, 5.0),
                0.4,
                Some(Rgb8::new(0xa8, 0x55, 0xf7)),
            ),
        ];
        Self::new(
            cfg,
            Camera {
                position: Vec3::new(0.0, 0.0, 8.0),
                fov: 75.0,
            },
            lights,
            SceneContent::Background { spheres },
        )
    }

    /// Gallery scene.
    pub fn gallery(cfg: &SceneConfig, gallery: Gallery) -> Self {
        let lights = vec![
            Light::ambient(0.5),
            Light::point(Vec3::new(10.0, 10.0, 10.0), 1.0, None),
            Light::point(Vec3::new(-10.0, -10.0, -10.0), 0.5, None),
            Light::directional(Vec3::new(0.0, 5.0, 5.0), 0.8),
        ];
        Self::new(
            cfg,
            Camera {
                position: Vec3::new(0.0, 3.0, 10.0),
                fov: 60.0,
            },
            lights,
            SceneContent::Gallery(gallery),
        )
    }

    fn new(cfg: &SceneConfig, camera: Camera, lights: Vec<Light>, content: SceneContent) -> Self {
        Self {
            cfg: cfg.clone(),
            camera,
            lights,
            content,
            context: None,
            particles: OnceCell::new(),
            particle_rotation: Vec3::ZERO,
            mounts: 0,
            frame: 0,
        }
    }

    /// Return `true` while a context is held.
    pub fn is_mounted(&self) -> bool {
        self.context.is_some()
    }

    /// Acquire a context and build the particle buffer. Idempotent.
    pub fn mount(&mut self, device: &mut impl GraphicsDevice) -> FolioResult<()> {
        if self.context.is_none() {
            let ctx = device.create_context()?;
            self.context = Some(ctx);
            self.mounts += 1;
            self.frame = 0;
            tracing::debug!(context = ctx.0, "scene context acquired");
        }
        if matches!(self.content, SceneContent::Background { .. }) {
            let (cfg, mounts) = (&self.cfg, self.mounts);
            self.particles
                .get_or_init(|| sample_particles(cfg, mounts));
        }
        Ok(())
    }

    /// Release the context and drop the particle buffer. Idempotent.
    pub fn unmount(&mut self, device: &mut impl GraphicsDevice) {
        if let Some(ctx) = self.context.take() {
            device.release_context(ctx);
            tracing::debug!(context = ctx.0, "scene context released");
        }
        self.particles = OnceCell::new();
        self.particle_rotation = Vec3::ZERO;
    }

    /// Particle positions, once generated.
    pub fn particles(&self) -> Option<&[Vec3]> {
        self.particles.get().map(Vec::as_slice)
    }

    /// Gallery state, for the gallery variant.
    pub fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        match &mut self.content {
            SceneContent::Gallery(g) => Some(g),
            SceneContent::Background { .. } => None,
        }
    }

    /// Advance one display frame. Does nothing while unmounted.
    pub fn frame(&mut self) -> bool {
        if self.context.is_none() {
            return false;
        }
        match &mut self.content {
            SceneContent::Background { spheres } => {
                for s in spheres {
                    s.rotation.x += self.cfg.sphere_spin;
                    s.rotation.y += self.cfg.sphere_spin;
                }
                self.particle_rotation.x += self.cfg.particle_spin_x;
                self.particle_rotation.y += self.cfg.particle_spin_y;
            }
            SceneContent::Gallery(g) => g.step(&self.cfg),
        }
        self.frame += 1;
        true
    }

    /// Frames rendered since the last mount.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            frame: self.frame,
            mounted: self.is_mounted(),
            camera: self.camera,
            lights: self.lights.clone(),
            content: self.content.clone(),
            particles: self.particles.get().map(|p| ParticleField {
                positions: p.clone(),
                rotation: self.particle_rotation,
            }),
        }
    }
}

fn sample_particles(cfg: &SceneConfig, mounts: u64) -> Vec<Vec3> {
    let mut rng = Rng64::new(cfg.seed ^ mounts.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let half = cfg.particle_extent / 2.0;
    (0..cfg.particle_count)
        .map(|_| {
            Vec3::new(
                rng.range(-half, half),
                rng.range(-half, half),
                rng.range(-half, half),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/renderer.rs"]
mod tests;
