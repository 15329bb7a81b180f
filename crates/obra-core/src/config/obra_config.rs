//! Top-level obra configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EncoderConfig, EstimatorConfig, ObservabilityConfig, StorageConfig, StrategyKind};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`OBRA_*`)
/// 2. Config file passed to [`ObraConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObraConfig {
    pub estimator: EstimatorConfig,
    pub encoder: EncoderConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl ObraConfig {
    /// Load configuration from an optional TOML file, then apply `OBRA_*`
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `OBRA_*` overrides. `lookup` resolves a variable name to its
    /// value; [`ObraConfig::load`] passes the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("OBRA_STRATEGY") {
            self.estimator.strategy = match value.trim() {
                "model" => StrategyKind::Model,
                "closed_form" => StrategyKind::ClosedForm,
                other => {
                    return Err(ConfigError::ValidationFailed {
                        field: "OBRA_STRATEGY".to_string(),
                        message: format!("unknown strategy '{other}'"),
                    })
                }
            };
        }
        if let Some(value) = lookup("OBRA_MODEL_PATH") {
            self.estimator.model_path = value;
        }
        if let Some(value) = lookup("OBRA_MODEL_LOAD_TIMEOUT_MS") {
            self.estimator.model_load_timeout_ms =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::ValidationFailed {
                        field: "OBRA_MODEL_LOAD_TIMEOUT_MS".to_string(),
                        message: format!("not a whole number of milliseconds: '{value}'"),
                    })?;
        }
        if let Some(value) = lookup("OBRA_STORAGE_PATH") {
            self.storage.path = value;
        }
        if let Some(value) = lookup("OBRA_LOG_LEVEL") {
            self.observability.log_level = value;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.estimator.model_load_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.model_load_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.estimator.model_cache_capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.model_cache_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(self.estimator.base_price_per_m2.is_finite() && self.estimator.base_price_per_m2 > 0.0)
        {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.base_price_per_m2".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if self.estimator.strategy == StrategyKind::Model
            && self.estimator.model_path.trim().is_empty()
        {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.model_path".to_string(),
                message: "required when strategy = \"model\"".to_string(),
            });
        }
        Ok(())
    }
}
