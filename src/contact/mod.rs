//! Contact form state and the relay that forwards it to the email function.

pub(crate) mod form;
pub(crate) mod relay;
