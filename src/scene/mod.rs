//! Decorative real-time scenes: the page background and the project gallery.

pub(crate) mod gallery;
pub(crate) mod model;
pub(crate) mod renderer;
