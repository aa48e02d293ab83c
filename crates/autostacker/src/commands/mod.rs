//! CLI command implementations

pub mod interpolate;
pub mod preprocess;
