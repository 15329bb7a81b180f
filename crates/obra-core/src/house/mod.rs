//! House description: the input to every estimation.

pub mod categories;
pub mod form;
pub mod lenient;

use serde::{Deserialize, Serialize};

pub use categories::{
    CoverageMaterial, FoundationType, HabitationStyle, QualityTier, Typology, WallMaterial,
};
pub use form::HouseForm;

/// A fully resolved house description.
///
/// Numeric fields keep whatever the form parsed to, including 0 for
/// malformed input. Consumers decide how to treat out-of-range values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseDescription {
    pub bedrooms: i64,
    pub floors: i64,
    /// Built area in square meters.
    pub area: f64,
    pub wall: WallMaterial,
    pub coverage: CoverageMaterial,
    pub foundation: FoundationType,
    pub quality: QualityTier,
    /// Opaque category id passed straight to the model.
    pub house_type_code: i64,
    pub duration_months: i64,
    pub typology: Typology,
    pub habitation: HabitationStyle,
    pub construction_year: Option<i32>,
}

impl HouseDescription {
    /// Shared base house for roof comparisons: 2 bedrooms, 40 m², one
    /// floor, medium quality, simple foundation, block walls, 6 months.
    pub fn comparison_baseline() -> Self {
        Self {
            bedrooms: 2,
            floors: 1,
            area: 40.0,
            wall: WallMaterial::Block,
            coverage: CoverageMaterial::SheetMetal,
            foundation: FoundationType::Simple,
            quality: QualityTier::Medium,
            house_type_code: 0,
            duration_months: 6,
            typology: Typology::T2,
            habitation: HabitationStyle::Conventional,
            construction_year: None,
        }
    }

    /// Copy of this description with a different roof coverage.
    pub fn with_coverage(&self, coverage: CoverageMaterial) -> Self {
        Self {
            coverage,
            ..self.clone()
        }
    }
}

impl Default for HouseDescription {
    fn default() -> Self {
        HouseForm::default().parse()
    }
}
