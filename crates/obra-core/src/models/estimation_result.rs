use serde::{Deserialize, Serialize};

use super::BreakdownPolicy;

/// Cost split across the four construction stages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub foundation: f64,
    pub walls: f64,
    pub coverage: f64,
    pub finishes: f64,
}

impl Breakdown {
    pub fn sum(&self) -> f64 {
        self.foundation + self.walls + self.coverage + self.finishes
    }
}

/// Confidence interval around the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

/// Output of one estimation call.
///
/// Serialized form matches what the report screen reads back from local
/// storage: `{ total, breakdown: {..}, range: { min, max } }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub total: f64,
    pub breakdown: Breakdown,
    pub range: CostRange,
}

impl EstimationResult {
    /// Derive breakdown and range from a total.
    pub fn from_total(total: f64, policy: &BreakdownPolicy) -> Self {
        Self {
            total,
            breakdown: Breakdown {
                foundation: total * policy.foundation,
                walls: total * policy.walls,
                coverage: total * policy.coverage,
                finishes: total * policy.finishes,
            },
            range: CostRange {
                min: total * policy.min_factor,
                max: total * policy.max_factor,
            },
        }
    }
}
