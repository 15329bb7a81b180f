//! Span definitions per operation: estimation, comparison, model load.

/// Create an estimation span.
#[macro_export]
macro_rules! estimation_span {
    ($strategy:expr) => {
        tracing::info_span!("obra.estimation", strategy = %$strategy)
    };
}

/// Create a comparison span.
#[macro_export]
macro_rules! comparison_span {
    ($first:expr, $second:expr) => {
        tracing::info_span!("obra.comparison", first = ?$first, second = ?$second)
    };
}

/// Create a model load span.
#[macro_export]
macro_rules! model_load_span {
    ($path:expr, $timeout_ms:expr) => {
        tracing::info_span!("obra.model_load", path = %$path, timeout_ms = $timeout_ms)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ESTIMATION: &str = "obra.estimation";
    pub const COMPARISON: &str = "obra.comparison";
    pub const MODEL_LOAD: &str = "obra.model_load";
}
