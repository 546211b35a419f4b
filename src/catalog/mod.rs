//! Static page content and the project filter engine.

mod builtin;
pub(crate) mod filter;
pub(crate) mod model;
