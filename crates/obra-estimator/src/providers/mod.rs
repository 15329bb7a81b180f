//! Regression model providers.

mod onnx_regressor;

pub use onnx_regressor::{OnnxLoader, OnnxRegressor};
