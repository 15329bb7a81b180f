//! # obra-core
//!
//! Foundation crate for the obra residential cost estimator.
//! Defines the house description, estimation result, errors, config,
//! and the traits the estimator and session crates plug into.

pub mod config;
pub mod constants;
pub mod errors;
pub mod house;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ObraConfig;
pub use errors::{ObraError, ObraResult};
pub use house::{HouseDescription, HouseForm};
pub use models::{BreakdownPolicy, Comparison, EstimationResult, FeatureVector};
