//! Model-backed strategy: encode, acquire the model, predict.

use obra_core::errors::{EstimationError, ObraResult};
use obra_core::house::HouseDescription;
use obra_encoding::FeatureEncoder;
use tracing::debug;

use crate::cache::ModelStore;

/// Estimates totals with a pre-trained regression model.
pub struct ModelBackedStrategy {
    store: ModelStore,
    model_path: String,
    encoder: FeatureEncoder,
}

impl ModelBackedStrategy {
    pub fn new(store: ModelStore, model_path: impl Into<String>, encoder: FeatureEncoder) -> Self {
        Self {
            store,
            model_path: model_path.into(),
            encoder,
        }
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Load the model ahead of the first estimation.
    pub async fn preload(&self) -> ObraResult<()> {
        self.store.acquire(&self.model_path).await.map(|_| ())
    }

    /// Predicted total for `house`.
    ///
    /// # Errors
    /// Model load failures and timeouts propagate unchanged. A prediction
    /// that is NaN, infinite or negative is `InvalidPrediction`.
    pub async fn total(&self, house: &HouseDescription) -> ObraResult<f64> {
        let model = self.store.acquire(&self.model_path).await?;
        let features = self.encoder.encode(house);
        let prediction = model.predict(&features)?;
        if !prediction.is_finite() || prediction < 0.0 {
            return Err(EstimationError::InvalidPrediction { value: prediction }.into());
        }
        debug!(model = model.name(), prediction, "model-backed estimate");
        Ok(prediction)
    }
}
