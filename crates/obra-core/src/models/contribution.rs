use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::house::HouseDescription;

/// A house description offered as future training data, optionally with
/// the cost actually observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub house: HouseDescription,
    pub actual_cost: Option<f64>,
    pub submitted_at: DateTime<Utc>,
}

impl Contribution {
    pub fn new(house: HouseDescription, actual_cost: Option<f64>) -> Self {
        Self {
            house,
            actual_cost,
            submitted_at: Utc::now(),
        }
    }
}
