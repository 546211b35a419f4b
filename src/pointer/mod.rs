//! Pointer-driven effects: cursor indicator, floating icon constellation and content parallax.

pub(crate) mod cursor;
pub(crate) mod floating;
pub(crate) mod parallax;
