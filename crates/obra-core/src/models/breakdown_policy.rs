use serde::{Deserialize, Serialize};

use crate::config::{BreakdownChoice, StrategyKind};
use crate::errors::ConfigError;

use super::EstimationResult;

/// Fractions used to split a total into stages, and the factors that
/// bound the confidence range.
///
/// Two presets exist because the two estimation strategies were tuned
/// separately. Custom policies must keep the fractions summing to 1 and
/// `min_factor <= 1 <= max_factor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakdownPolicy {
    pub foundation: f64,
    pub walls: f64,
    pub coverage: f64,
    pub finishes: f64,
    pub min_factor: f64,
    pub max_factor: f64,
}

const SUM_TOLERANCE: f64 = 1e-9;

impl BreakdownPolicy {
    /// Preset paired with the regression model: 30/20/30/20, ±10%.
    pub const MODEL_BACKED: Self = Self {
        foundation: 0.30,
        walls: 0.20,
        coverage: 0.30,
        finishes: 0.20,
        min_factor: 0.9,
        max_factor: 1.1,
    };

    /// Preset paired with the closed-form formula: 20/25/15/40, ±20%.
    pub const CLOSED_FORM: Self = Self {
        foundation: 0.20,
        walls: 0.25,
        coverage: 0.15,
        finishes: 0.40,
        min_factor: 0.8,
        max_factor: 1.2,
    };

    /// Build a custom policy, rejecting one that breaks the sum or range
    /// invariants.
    pub fn new(
        foundation: f64,
        walls: f64,
        coverage: f64,
        finishes: f64,
        min_factor: f64,
        max_factor: f64,
    ) -> Result<Self, ConfigError> {
        let fractions = [foundation, walls, coverage, finishes];
        if fractions.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "breakdown".to_string(),
                message: "fractions must be finite and non-negative".to_string(),
            });
        }
        let sum: f64 = fractions.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ConfigError::ValidationFailed {
                field: "breakdown".to_string(),
                message: format!("fractions must sum to 1, got {sum}"),
            });
        }
        if !(min_factor.is_finite() && max_factor.is_finite())
            || min_factor < 0.0
            || min_factor > 1.0
            || max_factor < 1.0
        {
            return Err(ConfigError::ValidationFailed {
                field: "range".to_string(),
                message: "need 0 <= min_factor <= 1 <= max_factor".to_string(),
            });
        }
        Ok(Self {
            foundation,
            walls,
            coverage,
            finishes,
            min_factor,
            max_factor,
        })
    }

    /// The preset that belongs to a strategy.
    pub fn for_strategy(strategy: StrategyKind) -> Self {
        match strategy {
            StrategyKind::Model => Self::MODEL_BACKED,
            StrategyKind::ClosedForm => Self::CLOSED_FORM,
        }
    }

    /// Resolve the configured choice against the active strategy.
    pub fn resolve(choice: BreakdownChoice, strategy: StrategyKind) -> Self {
        match choice {
            BreakdownChoice::Strategy => Self::for_strategy(strategy),
            BreakdownChoice::Model => Self::MODEL_BACKED,
            BreakdownChoice::ClosedForm => Self::CLOSED_FORM,
        }
    }

    pub fn apply(&self, total: f64) -> EstimationResult {
        EstimationResult::from_total(total, self)
    }
}
