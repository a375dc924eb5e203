//! Small helpers shared across layers.

pub mod json;
pub mod random;
pub mod validate;
