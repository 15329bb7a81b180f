//! ModelStore: acquire-then-run access to loaded cost models.
//!
//! Loading runs on the blocking pool under a timeout. Loaded handles are
//! memoised per path in a bounded moka cache; the artifacts are immutable,
//! so a cached handle never needs invalidating for correctness.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use obra_core::errors::{EstimationError, ObraResult};
use obra_core::traits::{CostRegressor, RegressorLoader};
use obra_observability::model_load_span;
use tracing::{debug, warn, Instrument};

/// Process-wide store of loaded model handles.
pub struct ModelStore {
    loader: Arc<dyn RegressorLoader>,
    handles: Cache<String, Arc<dyn CostRegressor>>,
    load_timeout: Duration,
}

impl ModelStore {
    pub fn new(loader: Arc<dyn RegressorLoader>, capacity: u64, load_timeout: Duration) -> Self {
        Self {
            loader,
            handles: Cache::builder().max_capacity(capacity).build(),
            load_timeout,
        }
    }

    /// Get the handle for `path`, loading it on first use.
    ///
    /// # Errors
    /// `ModelLoadTimeout` when loading takes longer than the configured
    /// timeout, `ModelLoadFailed` when the loader fails or panics.
    /// Failures are not cached; the next call retries the load.
    pub async fn acquire(&self, path: &str) -> ObraResult<Arc<dyn CostRegressor>> {
        if let Some(handle) = self.handles.get(path) {
            debug!(path, "model handle cache hit");
            return Ok(handle);
        }

        let timeout_ms = self.load_timeout.as_millis() as u64;
        let handle = self
            .load(path)
            .instrument(model_load_span!(path, timeout_ms))
            .await?;
        self.handles.insert(path.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    async fn load(&self, path: &str) -> ObraResult<Arc<dyn CostRegressor>> {
        let loader = Arc::clone(&self.loader);
        let owned_path = path.to_string();
        let task = tokio::task::spawn_blocking(move || loader.load(&owned_path));

        match tokio::time::timeout(self.load_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(EstimationError::ModelLoadFailed {
                path: path.to_string(),
                reason: format!("loader task failed: {join_error}"),
            }
            .into()),
            Err(_elapsed) => {
                let timeout_ms = self.load_timeout.as_millis() as u64;
                warn!(path, timeout_ms, "model load timed out");
                Err(EstimationError::ModelLoadTimeout {
                    path: path.to_string(),
                    timeout_ms,
                }
                .into())
            }
        }
    }

    /// Whether a handle for `path` is cached.
    pub fn is_loaded(&self, path: &str) -> bool {
        self.handles.contains_key(path)
    }

    /// Drop the cached handle for `path`, forcing a reload on next use.
    pub fn invalidate(&self, path: &str) {
        self.handles.invalidate(path);
    }

    pub fn load_timeout(&self) -> Duration {
        self.load_timeout
    }
}
