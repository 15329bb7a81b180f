use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COUNT;

/// Fixed-order numeric encoding of a house, as the model consumes it:
/// `[bedrooms, area, floors, coverage, foundation, duration, wall,
/// house_type, quality]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    pub const BEDROOMS: usize = 0;
    pub const AREA: usize = 1;
    pub const FLOORS: usize = 2;
    pub const COVERAGE: usize = 3;
    pub const FOUNDATION: usize = 4;
    pub const DURATION: usize = 5;
    pub const WALL: usize = 6;
    pub const HOUSE_TYPE: usize = 7;
    pub const QUALITY: usize = 8;

    pub fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f32; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }

    /// Owned copy for building a `[1, 9]` input tensor.
    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
