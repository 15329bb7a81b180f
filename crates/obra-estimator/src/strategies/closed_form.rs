//! Closed-form fallback: base cost times per-category multipliers times
//! an age factor. Needs no model file.

use obra_core::config::defaults;
use obra_core::errors::{EstimationError, ObraResult};
use obra_core::house::{
    CoverageMaterial, FoundationType, HabitationStyle, HouseDescription, Typology, WallMaterial,
};
use tracing::debug;

/// Cost change per year between construction year and now.
const AGE_FACTOR_PER_YEAR: f64 = 0.02;

/// Lower clamp on the age factor.
const MIN_AGE_FACTOR: f64 = 0.8;

/// Per-category multipliers for one house. Unknown categories are 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    pub typology: f64,
    pub coverage: f64,
    pub foundation: f64,
    pub wall: f64,
    pub habitation: f64,
}

impl Multipliers {
    pub fn for_house(house: &HouseDescription) -> Self {
        Self {
            typology: match house.typology {
                Typology::T1 => 0.8,
                Typology::T2 => 1.0,
                Typology::T3 => 1.2,
                Typology::T4 => 1.5,
                Typology::T5 => 1.8,
                Typology::Unknown => 1.0,
            },
            coverage: match house.coverage {
                CoverageMaterial::SheetMetal => 1.0,
                CoverageMaterial::Tile => 1.3,
                CoverageMaterial::Slab => 1.6,
                CoverageMaterial::Unknown => 1.0,
            },
            foundation: match house.foundation {
                FoundationType::Simple => 1.0,
                FoundationType::Superficial => 1.2,
                FoundationType::Deep => 1.5,
                FoundationType::Unknown => 1.0,
            },
            wall: match house.wall {
                WallMaterial::Adobe => 0.8,
                WallMaterial::Block => 1.0,
                WallMaterial::Brick => 1.2,
                WallMaterial::Unknown => 1.0,
            },
            habitation: match house.habitation {
                HabitationStyle::Traditional => 0.9,
                HabitationStyle::Conventional => 1.0,
                HabitationStyle::Modern => 1.3,
                HabitationStyle::Unknown => 1.0,
            },
        }
    }

    pub fn product(&self) -> f64 {
        self.typology * self.coverage * self.foundation * self.wall * self.habitation
    }
}

/// `max(0.8, 1 + (construction_year - current_year) * 0.02)`.
pub fn age_factor(construction_year: i32, current_year: i32) -> f64 {
    let years = f64::from(construction_year) - f64::from(current_year);
    (1.0 + years * AGE_FACTOR_PER_YEAR).max(MIN_AGE_FACTOR)
}

/// The closed-form estimation strategy.
#[derive(Debug, Clone, Copy)]
pub struct ClosedFormStrategy {
    base_price_per_m2: f64,
}

impl Default for ClosedFormStrategy {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_BASE_PRICE_PER_M2)
    }
}

impl ClosedFormStrategy {
    pub fn new(base_price_per_m2: f64) -> Self {
        Self { base_price_per_m2 }
    }

    pub fn base_price_per_m2(&self) -> f64 {
        self.base_price_per_m2
    }

    /// `area * price * floors`. Non-positive area or floors fall back to
    /// 100 m² and one floor.
    pub fn base_cost(&self, house: &HouseDescription) -> f64 {
        let area = if house.area > 0.0 {
            house.area
        } else {
            defaults::DEFAULT_AREA_M2
        };
        let floors = if house.floors > 0 {
            house.floors
        } else {
            defaults::DEFAULT_FLOORS
        };
        area * self.base_price_per_m2 * floors as f64
    }

    /// Total cost rounded to whole currency units. A missing construction
    /// year counts as `current_year`.
    ///
    /// # Errors
    /// `NonFiniteTotal` when the area is so large the cost overflows.
    pub fn total(&self, house: &HouseDescription, current_year: i32) -> ObraResult<f64> {
        let base = self.base_cost(house);
        let multipliers = Multipliers::for_house(house);
        let age = age_factor(house.construction_year.unwrap_or(current_year), current_year);
        let total = (base * multipliers.product() * age).round();
        if !total.is_finite() {
            return Err(EstimationError::NonFiniteTotal { value: total }.into());
        }
        debug!(base, ?multipliers, age, total, "closed-form estimate");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_house() -> HouseDescription {
        HouseDescription {
            area: 100.0,
            floors: 1,
            typology: Typology::T2,
            coverage: CoverageMaterial::Tile,
            foundation: FoundationType::Simple,
            wall: WallMaterial::Block,
            habitation: HabitationStyle::Conventional,
            construction_year: None,
            ..HouseDescription::default()
        }
    }

    #[test]
    fn tile_roof_reference_total() {
        let strategy = ClosedFormStrategy::default();
        assert_eq!(strategy.base_cost(&reference_house()), 200_000.0);
        assert_eq!(strategy.total(&reference_house(), 2026).unwrap(), 260_000.0);
    }

    #[test]
    fn unknown_categories_are_neutral() {
        let house = HouseDescription {
            typology: Typology::Unknown,
            coverage: CoverageMaterial::Unknown,
            foundation: FoundationType::Unknown,
            wall: WallMaterial::Unknown,
            habitation: HabitationStyle::Unknown,
            ..reference_house()
        };
        assert_eq!(Multipliers::for_house(&house).product(), 1.0);
        assert_eq!(ClosedFormStrategy::default().total(&house, 2026).unwrap(), 200_000.0);
    }

    #[test]
    fn age_factor_moves_with_year_and_clamps() {
        assert_eq!(age_factor(2026, 2026), 1.0);
        assert!((age_factor(2031, 2026) - 1.1).abs() < 1e-12);
        assert!((age_factor(2021, 2026) - 0.9).abs() < 1e-12);
        assert_eq!(age_factor(1990, 2026), 0.8);
    }

    #[test]
    fn non_positive_area_and_floors_use_defaults() {
        let house = HouseDescription {
            area: 0.0,
            floors: 0,
            ..reference_house()
        };
        assert_eq!(ClosedFormStrategy::default().base_cost(&house), 200_000.0);
    }

    #[test]
    fn overflowing_area_is_an_error() {
        let house = HouseDescription {
            area: 1e306,
            ..reference_house()
        };
        let err = ClosedFormStrategy::default().total(&house, 2026).unwrap_err();
        assert!(matches!(
            err,
            obra_core::ObraError::Estimation(EstimationError::NonFiniteTotal { .. })
        ));
    }

    #[test]
    fn most_expensive_combination() {
        let house = HouseDescription {
            typology: Typology::T5,
            coverage: CoverageMaterial::Slab,
            foundation: FoundationType::Deep,
            wall: WallMaterial::Brick,
            habitation: HabitationStyle::Modern,
            ..reference_house()
        };
        let expected = (200_000.0f64 * 1.8 * 1.6 * 1.5 * 1.2 * 1.3).round();
        assert_eq!(ClosedFormStrategy::default().total(&house, 2026).unwrap(), expected);
    }
}
