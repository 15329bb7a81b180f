//! FeatureEncoder: pure HouseDescription → FeatureVector mapping.

use obra_core::config::{CoverageEncoding, EncoderConfig};
use obra_core::house::{HouseDescription, HouseForm};
use obra_core::models::FeatureVector;
use tracing::debug;

use crate::codes;

/// Encodes houses into the model's 9-column input order.
///
/// Stateless apart from the coverage table choice; the same input always
/// yields the same vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder {
    coverage_encoding: CoverageEncoding,
}

impl FeatureEncoder {
    pub fn new(config: &EncoderConfig) -> Self {
        Self {
            coverage_encoding: config.coverage_encoding,
        }
    }

    pub fn with_coverage_encoding(coverage_encoding: CoverageEncoding) -> Self {
        Self { coverage_encoding }
    }

    pub fn coverage_encoding(&self) -> CoverageEncoding {
        self.coverage_encoding
    }

    /// Encode a resolved house description.
    pub fn encode(&self, house: &HouseDescription) -> FeatureVector {
        let mut values = [0.0f32; obra_core::constants::FEATURE_COUNT];
        values[FeatureVector::BEDROOMS] = house.bedrooms as f32;
        values[FeatureVector::AREA] = narrow(house.area);
        values[FeatureVector::FLOORS] = house.floors as f32;
        values[FeatureVector::COVERAGE] =
            codes::coverage_code(house.coverage, self.coverage_encoding);
        values[FeatureVector::FOUNDATION] = codes::foundation_code(house.foundation);
        values[FeatureVector::DURATION] = house.duration_months as f32;
        values[FeatureVector::WALL] = codes::wall_code(house.wall);
        values[FeatureVector::HOUSE_TYPE] = house.house_type_code as f32;
        values[FeatureVector::QUALITY] = codes::quality_score(house.quality);

        debug!(features = ?values, "encoded house description");
        FeatureVector::new(values)
    }

    /// Parse and encode raw form input in one step.
    pub fn encode_form(&self, form: &HouseForm) -> FeatureVector {
        self.encode(&form.parse())
    }
}

/// Narrow to the model's f32 input. Values beyond f32 range count as
/// malformed and become 0.
fn narrow(value: f64) -> f32 {
    let narrowed = value as f32;
    if narrowed.is_finite() {
        narrowed
    } else {
        0.0
    }
}
