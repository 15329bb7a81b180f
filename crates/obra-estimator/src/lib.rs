//! # obra-estimator
//!
//! Produces an [`EstimationResult`](obra_core::EstimationResult) for a
//! house. The total comes either from a pre-trained ONNX regression model
//! or from a closed-form multiplier formula; breakdown and range are then
//! derived from the total by a [`BreakdownPolicy`](obra_core::BreakdownPolicy).

pub mod cache;
pub mod engine;
pub mod providers;
pub mod strategies;

pub use cache::ModelStore;
pub use engine::CostEstimator;
pub use providers::{OnnxLoader, OnnxRegressor};
pub use strategies::{ClosedFormStrategy, ModelBackedStrategy, Strategy};
