//! Estimation strategies: where the total comes from.

mod closed_form;
mod model_backed;

pub use closed_form::{age_factor, ClosedFormStrategy, Multipliers};
pub use model_backed::ModelBackedStrategy;

use obra_core::config::StrategyKind;
use obra_core::errors::ObraResult;
use obra_core::house::HouseDescription;

/// The active strategy. Both variants yield a finite, non-negative total
/// or an error.
pub enum Strategy {
    Model(ModelBackedStrategy),
    ClosedForm(ClosedFormStrategy),
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Model(_) => StrategyKind::Model,
            Self::ClosedForm(_) => StrategyKind::ClosedForm,
        }
    }

    /// Compute the total cost for `house`. `current_year` only affects the
    /// closed-form age factor.
    pub async fn total(&self, house: &HouseDescription, current_year: i32) -> ObraResult<f64> {
        match self {
            Self::Model(strategy) => strategy.total(house).await,
            Self::ClosedForm(strategy) => strategy.total(house, current_year),
        }
    }
}
