// Single source of truth for all default values.

// --- Estimator ---
pub const DEFAULT_MODEL_PATH: &str = "modelo_rf.onnx";
pub const DEFAULT_MODEL_INPUT_NAME: &str = "input";
pub const DEFAULT_MODEL_LOAD_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MODEL_CACHE_CAPACITY: u64 = 4;
pub const DEFAULT_BASE_PRICE_PER_M2: f64 = 2_000.0;
pub const DEFAULT_CONTRIBUTE_DELAY_MS: u64 = 1_000;

// --- Closed-form fallbacks for unusable numeric input ---
pub const DEFAULT_AREA_M2: f64 = 100.0;
pub const DEFAULT_FLOORS: i64 = 1;

// --- Storage ---
pub const DEFAULT_STORAGE_PATH: &str = "";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
