//! Loaded model handles, shared across estimations.

mod model_store;

pub use model_store::ModelStore;
