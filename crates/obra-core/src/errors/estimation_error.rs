/// Estimation path errors. Any of these is fatal to the current
/// estimation request and nothing else.
#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    #[error("model load failed: {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("model load timed out after {timeout_ms}ms: {path}")]
    ModelLoadTimeout { path: String, timeout_ms: u64 },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("model produced an invalid prediction: {value}")]
    InvalidPrediction { value: f64 },

    #[error("closed-form total is not a finite amount: {value}")]
    NonFiniteTotal { value: f64 },
}
