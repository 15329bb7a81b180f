//! ONNX Runtime regression provider.
//!
//! Loads the cost model via the `ort` crate (v2). The model takes one
//! `[1, 9]` float tensor and returns a single scalar.

use std::path::Path;
use std::sync::{Arc, Mutex};

use obra_core::constants::FEATURE_COUNT;
use obra_core::errors::{EstimationError, ObraResult};
use obra_core::models::FeatureVector;
use obra_core::traits::{CostRegressor, RegressorLoader};
use ort::session::Session;
use ort::value::Tensor;
use tracing::{debug, info};

/// ONNX-backed cost regressor.
pub struct OnnxRegressor {
    /// `run` needs `&mut Session`, so the session sits behind a Mutex.
    session: Mutex<Session>,
    input_name: String,
    model_name: String,
}

impl OnnxRegressor {
    /// Load a model from `model_path`.
    ///
    /// # Errors
    /// Returns `EstimationError::ModelLoadFailed` if the file is missing or
    /// the runtime rejects it.
    pub fn load(model_path: &str, input_name: &str) -> ObraResult<Self> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(EstimationError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let load_err = |reason: String| EstimationError::ModelLoadFailed {
            path: model_path.to_string(),
            reason,
        };

        let session = Session::builder()
            .map_err(|e| load_err(e.to_string()))?
            .with_intra_threads(1)
            .map_err(|e| load_err(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_err(e.to_string()))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        info!(model = %model_name, input = input_name, "ONNX cost model loaded");

        Ok(Self {
            session: Mutex::new(session),
            input_name: input_name.to_string(),
            model_name,
        })
    }

    fn infer(&self, features: &FeatureVector) -> ObraResult<f64> {
        let input = Tensor::from_array((vec![1i64, FEATURE_COUNT as i64], features.to_vec()))
            .map_err(|e| EstimationError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| EstimationError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input])
            .map_err(|e| EstimationError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // Extract the first output tensor.
        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| EstimationError::InferenceFailed {
                reason: "no output tensor".to_string(),
            })?;

        // Tree ensembles exported from scikit-learn emit f32; some
        // exporters keep f64.
        let value = if let Ok((_shape, data)) = output.try_extract_tensor::<f32>() {
            data.first().map(|v| f64::from(*v))
        } else {
            let (_shape, data) =
                output
                    .try_extract_tensor::<f64>()
                    .map_err(|e| EstimationError::InferenceFailed {
                        reason: format!("tensor extraction failed: {e}"),
                    })?;
            data.first().copied()
        };

        let value = value.ok_or_else(|| EstimationError::InferenceFailed {
            reason: "empty output tensor".to_string(),
        })?;
        debug!(model = %self.model_name, prediction = value, "ONNX inference complete");
        Ok(value)
    }
}

impl CostRegressor for OnnxRegressor {
    fn predict(&self, features: &FeatureVector) -> ObraResult<f64> {
        self.infer(features)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

/// Loads [`OnnxRegressor`]s for a fixed input tensor name.
#[derive(Debug, Clone)]
pub struct OnnxLoader {
    input_name: String,
}

impl OnnxLoader {
    pub fn new(input_name: impl Into<String>) -> Self {
        Self {
            input_name: input_name.into(),
        }
    }
}

impl RegressorLoader for OnnxLoader {
    fn load(&self, path: &str) -> ObraResult<Arc<dyn CostRegressor>> {
        Ok(Arc::new(OnnxRegressor::load(path, &self.input_name)?))
    }
}
