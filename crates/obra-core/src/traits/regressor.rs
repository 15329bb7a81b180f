use std::sync::Arc;

use crate::errors::ObraResult;
use crate::models::FeatureVector;

/// A loaded, read-only cost model: one feature vector in, one scalar out.
pub trait CostRegressor: Send + Sync {
    /// Predict a total cost for the encoded house.
    fn predict(&self, features: &FeatureVector) -> ObraResult<f64>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}

/// Loads a [`CostRegressor`] from a model artifact path.
///
/// Loading may block for a long time (disk or network); callers run it
/// off the async executor and bound it with a timeout.
pub trait RegressorLoader: Send + Sync {
    fn load(&self, path: &str) -> ObraResult<Arc<dyn CostRegressor>>;
}
