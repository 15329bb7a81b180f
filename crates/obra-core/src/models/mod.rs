pub mod breakdown_policy;
pub mod comparison;
pub mod contribution;
pub mod estimation_result;
pub mod feature_vector;
pub mod user;

pub use breakdown_policy::BreakdownPolicy;
pub use comparison::Comparison;
pub use contribution::Contribution;
pub use estimation_result::{Breakdown, CostRange, EstimationResult};
pub use feature_vector::FeatureVector;
pub use user::{User, UserPatch};
