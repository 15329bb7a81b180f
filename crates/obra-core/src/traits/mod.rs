pub mod regressor;
pub mod storage;

pub use regressor::{CostRegressor, RegressorLoader};
pub use storage::KeyValueStore;
