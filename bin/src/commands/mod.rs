//! CLI command implementations.

pub(crate) mod assess;
pub(crate) mod form;
pub(crate) mod template;
