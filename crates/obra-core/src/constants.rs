/// obra version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of values in a feature vector.
pub const FEATURE_COUNT: usize = 9;

/// Currency suffix used in every displayed amount (Mozambican metical).
pub const CURRENCY: &str = "MZN";

/// Local storage key for the last estimation result.
pub const ESTIMATION_RESULT_KEY: &str = "estimationResult";

/// Local storage key for the serialized user.
pub const USER_KEY: &str = "user";

/// Local storage key for the session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Sentinel shown when an amount or percentage is undefined.
pub const NOT_AVAILABLE: &str = "N/D";
