//! Configuration system for obra.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod defaults;
pub mod encoder_config;
pub mod estimator_config;
pub mod obra_config;
pub mod observability_config;
pub mod storage_config;

pub use encoder_config::{CoverageEncoding, EncoderConfig};
pub use estimator_config::{BreakdownChoice, EstimatorConfig, StrategyKind};
pub use obra_config::ObraConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;
