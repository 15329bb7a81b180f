//! Hand-off of the last estimation from the estimate screen to the report
//! screen through the local store.

use obra_core::constants::ESTIMATION_RESULT_KEY;
use obra_core::errors::{ObraResult, StorageError};
use obra_core::models::{BreakdownPolicy, EstimationResult};
use obra_core::traits::KeyValueStore;
use serde_json::Value;
use tracing::warn;

/// Saves and restores the last [`EstimationResult`].
pub struct EstimationHandoff;

impl EstimationHandoff {
    /// Store `result` as JSON.
    pub fn save(store: &dyn KeyValueStore, result: &EstimationResult) -> ObraResult<()> {
        let json = serde_json::to_string(result).map_err(|e| StorageError::Serialization {
            key: ESTIMATION_RESULT_KEY.to_string(),
            message: e.to_string(),
        })?;
        store.set(ESTIMATION_RESULT_KEY, &json)
    }

    /// Restore the last result, re-deriving breakdown and range from the
    /// stored total under `policy`.
    ///
    /// Only `total` is trusted. A missing or non-numeric total reads as 0.
    /// Unparsable JSON yields `None`.
    pub fn load(
        store: &dyn KeyValueStore,
        policy: &BreakdownPolicy,
    ) -> ObraResult<Option<EstimationResult>> {
        let Some(raw) = store.get(ESTIMATION_RESULT_KEY)? else {
            return Ok(None);
        };
        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "stored estimation result is unreadable");
                return Ok(None);
            }
        };
        let total = stored_total(&parsed);
        Ok(Some(policy.apply(total)))
    }

    pub fn clear(store: &dyn KeyValueStore) -> ObraResult<()> {
        store.remove(ESTIMATION_RESULT_KEY)
    }
}

fn stored_total(parsed: &Value) -> f64 {
    let total = match parsed.get("total") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if total.is_finite() {
        total
    } else {
        0.0
    }
}
