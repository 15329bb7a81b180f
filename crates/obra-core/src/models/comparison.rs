use serde::{Deserialize, Serialize};

use crate::constants::NOT_AVAILABLE;

use super::EstimationResult;

/// Two independent estimations and how far apart they are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub first: EstimationResult,
    pub second: EstimationResult,
    /// `second.total - first.total`.
    pub difference: f64,
    /// `difference / first.total * 100`. Non-finite when the first total
    /// is zero; use [`Comparison::percentage_display`] to show it.
    pub percentage_difference: f64,
}

impl Comparison {
    pub fn new(first: EstimationResult, second: EstimationResult) -> Self {
        let difference = second.total - first.total;
        let percentage_difference = if first.total == 0.0 {
            f64::NAN
        } else {
            difference / first.total * 100.0
        };
        Self {
            first,
            second,
            difference,
            percentage_difference,
        }
    }

    /// Whether the percentage can be shown.
    pub fn has_percentage(&self) -> bool {
        self.percentage_difference.is_finite()
    }

    /// One-decimal percentage, or `N/D` when undefined.
    pub fn percentage_display(&self) -> String {
        if self.has_percentage() {
            format!("{:.1}%", self.percentage_difference)
        } else {
            NOT_AVAILABLE.to_string()
        }
    }

    /// Same comparison with the two sides swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.second, self.first)
    }
}
