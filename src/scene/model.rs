use crate::foundation::core::{Rgb8, Vec3};

/// Handle to a graphics context issued by a [`crate::GraphicsDevice`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ContextId(pub u64);

/// Perspective camera.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f64,
}

/// Light source type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    /// Uniform light from everywhere.
    Ambient,
    /// Parallel light from `position` toward the origin.
    Directional,
    /// Omnidirectional light at `position`.
    Point,
}

/// One scene light.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Light {
    /// Light type.
    pub kind: LightKind,
    /// Position (ignored for ambient lights).
    pub position: Vec3,
    /// Intensity multiplier.
    pub intensity: f64,
    /// Tint; `None` is white.
    pub color: Option<Rgb8>,
}

impl Light {
    /// Ambient light.
    pub fn ambient(intensity: f64) -> Self {
        Self {
            kind: LightKind::Ambient,
            position: Vec3::ZERO,
            intensity,
            color: None,
        }
    }

    /// Directional light.
    pub fn directional(position: Vec3, intensity: f64) -> Self {
        Self {
            kind: LightKind::Directional,
            position,
            intensity,
            color: None,
        }
    }

    /// Point light, optionally tinted.
    pub fn point(position: Vec3, intensity: f64, color: Option<Rgb8>) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            intensity,
            color,
        }
    }
}

/// Physically based surface parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    /// Base and emissive color.
    pub color: Rgb8,
    /// Surface roughness in `[0, 1]`.
    pub roughness: f64,
    /// Metalness in `[0, 1]`.
    pub metalness: f64,
    /// Emissive intensity.
    pub emissive: f64,
}

/// Rotating sphere of the background scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sphere {
    /// Fixed position.
    pub position: Vec3,
    /// Radius.
    pub radius: f64,
    /// Width and height segment count.
    pub segments: u32,
    /// Surface.
    pub material: Material,
    /// Accumulated rotation (radians).
    pub rotation: Vec3,
}

impl Sphere {
    /// Unit sphere at `position` with the glossy background material.
    pub fn glossy(position: Vec3, color: Rgb8) -> Self {
        Self {
            position,
            radius: 1.0,
            segments: 32,
            material: Material {
                color,
                roughness: 0.2,
                metalness: 0.8,
                emissive: 0.2,
            },
            rotation: Vec3::ZERO,
        }
    }
}

/// Drifting particle field, rotated as a rigid body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleField {
    /// Positions sampled once per mount.
    pub positions: Vec<Vec3>,
    /// Accumulated rotation (radians).
    pub rotation: Vec3,
}
