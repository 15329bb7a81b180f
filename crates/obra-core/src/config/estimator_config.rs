use serde::{Deserialize, Serialize};

use super::defaults;

/// Which estimation strategy produces the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Pre-trained regression model loaded from `model_path`.
    #[default]
    Model,
    /// Hand-coded multiplier formula, no model file.
    ClosedForm,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::ClosedForm => "closed_form",
        }
    }
}

/// Which breakdown/range preset to apply to a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownChoice {
    /// Use the preset that belongs to the active strategy.
    #[default]
    Strategy,
    /// Always use the model-backed preset.
    Model,
    /// Always use the closed-form preset.
    ClosedForm,
}

/// Estimator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub strategy: StrategyKind,
    /// Path to the ONNX regression model.
    pub model_path: String,
    /// Name of the model's single input tensor.
    pub model_input_name: String,
    /// Upper bound on a single model load.
    pub model_load_timeout_ms: u64,
    /// Max number of loaded model handles kept in memory.
    pub model_cache_capacity: u64,
    pub breakdown: BreakdownChoice,
    /// Closed-form base price per square meter.
    pub base_price_per_m2: f64,
    /// Simulated processing delay for contributions.
    pub contribute_delay_ms: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            model_path: defaults::DEFAULT_MODEL_PATH.to_string(),
            model_input_name: defaults::DEFAULT_MODEL_INPUT_NAME.to_string(),
            model_load_timeout_ms: defaults::DEFAULT_MODEL_LOAD_TIMEOUT_MS,
            model_cache_capacity: defaults::DEFAULT_MODEL_CACHE_CAPACITY,
            breakdown: BreakdownChoice::default(),
            base_price_per_m2: defaults::DEFAULT_BASE_PRICE_PER_M2,
            contribute_delay_ms: defaults::DEFAULT_CONTRIBUTE_DELAY_MS,
        }
    }
}
