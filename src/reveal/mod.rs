//! Scroll-triggered entrances and the loading screen that gates the page-load entrance.

pub(crate) mod driver;
pub(crate) mod gate;
pub(crate) mod trigger;
