//! # obra-encoding
//!
//! Maps a [`HouseDescription`](obra_core::HouseDescription) to the
//! fixed-order [`FeatureVector`](obra_core::FeatureVector) the cost model
//! was trained on.

pub mod codes;
pub mod encoder;

pub use encoder::FeatureEncoder;
