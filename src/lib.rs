//! Folio is the headless engine behind an animated single-page portfolio.
//!
//! The page is modeled as a set of small state machines that a host (the browser adapter in
//! [`web`] or the `folio` CLI) drives with scroll, pointer and frame events:
//!
//! - Filter the project [`Catalog`] by category and subcategory ([`ProjectGallery`])
//! - Track the active [`SectionId`] from the scroll offset ([`ScrollTracker`])
//! - Play tween [`Timeline`]s on a [`Stage`] through a cooperative [`Scheduler`]
//! - Reveal sections and cards on scroll ([`RevealDriver`]) once the [`LoadingGate`] finishes
//! - Animate the decorative background ([`SceneRenderer`])
//! - Relay contact form submissions to an external function ([`ContactRelay`])
//!
//! [`Page`] wires all of them together.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod contact;
pub(crate) mod page;
pub(crate) mod pointer;
pub(crate) mod reveal;
pub(crate) mod scene;
/// Browser adapter (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use crate::foundation::core::{Band, Point, Rect, Rgb8, Vec2, Vec3, Viewport};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::foundation::math::{Rng64, lerp};

pub use crate::animation::ease::Ease;
pub use crate::animation::scheduler::{Scheduler, TimelineEvent, TimelineId};
pub use crate::animation::stage::{NodeId, NodeProps, Prop, Stage};
pub use crate::animation::timeline::{Repeat, Timeline};
pub use crate::animation::tween::Tween;

pub use crate::catalog::filter::{
    CategoryFilter, GalleryView, ProjectGallery, Selection, SubcategoryFilter, visible_projects,
};
pub use crate::catalog::model::{
    AspectRatio, Catalog, Category, CategoryInfo, Certification, Media, MediaKind, Profile,
    Project, Skill, SkillGroup, SkillSet, Subcategory, SubcategoryInfo,
};

pub use crate::config::{
    ContactConfig, CursorConfig, ENV_FUNCTIONS_KEY, ENV_FUNCTIONS_URL, FloatingConfig,
    GateConfig, ParallaxConfig, RevealConfig, SceneConfig, ScrollConfig, SiteConfig,
};

pub use crate::contact::form::{ContactForm, ContactPayload, Field, Notice, NoticeKind};
#[cfg(not(target_arch = "wasm32"))]
pub use crate::contact::relay::HttpFunctionClient;
pub use crate::contact::relay::{ContactFunction, ContactRelay, SEND_CONTACT_EMAIL};

pub use crate::page::Page;
pub use crate::page::listeners::{ElementId, EventKind, ListenerId, Listeners};
pub use crate::page::nav::{NavItem, Navigation, Theme};
pub use crate::page::scroll::{
    PageLayout, ScrollBehavior, ScrollRequest, ScrollTracker, SectionLayout,
};
pub use crate::page::section::SectionId;

pub use crate::pointer::cursor::{CustomCursor, is_interactive};
pub use crate::pointer::floating::{FloatingIcon, FloatingIcons, Oscillation};
pub use crate::pointer::parallax::MouseParallax;

pub use crate::reveal::driver::{RevealDriver, RevealKey};
pub use crate::reveal::gate::{GateCallback, LoadingGate};
pub use crate::reveal::trigger::{ScrollTrigger, TriggerEvent};

pub use crate::scene::gallery::{CARD_SIZE, Gallery, GalleryCard};
pub use crate::scene::model::{
    Camera, ContextId, Light, LightKind, Material, ParticleField, Sphere,
};
pub use crate::scene::renderer::{
    GraphicsDevice, HeadlessDevice, SceneContent, SceneRenderer, SceneSnapshot,
};
