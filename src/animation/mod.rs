//! Tween descriptors, timelines and the cooperative scheduler that plays them.

pub(crate) mod ease;
pub(crate) mod scheduler;
pub(crate) mod stage;
pub(crate) mod timeline;
pub(crate) mod tween;
