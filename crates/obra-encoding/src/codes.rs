//! Categorical lookup tables for the model's input columns.

use obra_core::config::CoverageEncoding;
use obra_core::house::{CoverageMaterial, FoundationType, QualityTier, WallMaterial};

/// Roof coverage code. Unknown coverage is 0.
pub fn coverage_code(coverage: CoverageMaterial, encoding: CoverageEncoding) -> f32 {
    match (coverage, encoding) {
        (CoverageMaterial::SheetMetal, _) => 0.0,
        (CoverageMaterial::Tile, _) => 1.0,
        (CoverageMaterial::Slab, CoverageEncoding::Distinct) => 2.0,
        (CoverageMaterial::Slab, CoverageEncoding::Collapsed) => 1.0,
        (CoverageMaterial::Unknown, _) => 0.0,
    }
}

/// Simple foundation is 0, anything else (unknown included) is 1.
pub fn foundation_code(foundation: FoundationType) -> f32 {
    match foundation {
        FoundationType::Simple => 0.0,
        FoundationType::Deep | FoundationType::Superficial | FoundationType::Unknown => 1.0,
    }
}

/// Block walls are 0, anything else (unknown included) is 1.
pub fn wall_code(wall: WallMaterial) -> f32 {
    match wall {
        WallMaterial::Block => 0.0,
        WallMaterial::Brick | WallMaterial::Adobe | WallMaterial::Unknown => 1.0,
    }
}

/// Quality is a score, not a flag: low 3, medium 7, high 9. Unknown is 0.
pub fn quality_score(quality: QualityTier) -> f32 {
    match quality {
        QualityTier::Low => 3.0,
        QualityTier::Medium => 7.0,
        QualityTier::High => 9.0,
        QualityTier::Unknown => 0.0,
    }
}
