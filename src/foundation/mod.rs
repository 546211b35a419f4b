//! Shared value types, errors and small math helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
