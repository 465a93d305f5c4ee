//! Output generators for the aggregated documentation tree.

#[cfg(feature = "json")]
pub mod json;
