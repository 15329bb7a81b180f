//! CostEstimator: the main entry point for obra-estimator.
//!
//! Runs the active strategy, derives breakdown and range with the active
//! policy, and layers comparison and contribution on top.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use obra_core::config::{ObraConfig, StrategyKind};
use obra_core::errors::ObraResult;
use obra_core::house::{CoverageMaterial, HouseDescription, HouseForm};
use obra_core::models::{BreakdownPolicy, Comparison, Contribution, EstimationResult};
use obra_core::traits::RegressorLoader;
use obra_encoding::FeatureEncoder;
use obra_observability::{comparison_span, estimation_span};
use tracing::{debug, info, Instrument};

use crate::cache::ModelStore;
use crate::providers::OnnxLoader;
use crate::strategies::{ClosedFormStrategy, ModelBackedStrategy, Strategy};

/// The cost estimator.
///
/// Holds no per-call state: every estimation is independent, and two may
/// run concurrently. The only shared resource is the read-only model
/// handle cache inside the model-backed strategy.
pub struct CostEstimator {
    strategy: Strategy,
    policy: BreakdownPolicy,
    contribute_delay: Duration,
    pinned_year: Option<i32>,
}

impl CostEstimator {
    /// Build from configuration, loading models with ONNX Runtime.
    pub fn from_config(config: &ObraConfig) -> ObraResult<Self> {
        let loader = Arc::new(OnnxLoader::new(config.estimator.model_input_name.clone()));
        Self::with_loader(config, loader)
    }

    /// Build from configuration with a custom model loader.
    pub fn with_loader(config: &ObraConfig, loader: Arc<dyn RegressorLoader>) -> ObraResult<Self> {
        config.validate()?;
        let est = &config.estimator;

        let strategy = match est.strategy {
            StrategyKind::Model => {
                let store = ModelStore::new(
                    loader,
                    est.model_cache_capacity,
                    Duration::from_millis(est.model_load_timeout_ms),
                );
                let encoder = FeatureEncoder::new(&config.encoder);
                Strategy::Model(ModelBackedStrategy::new(store, est.model_path.clone(), encoder))
            }
            StrategyKind::ClosedForm => {
                Strategy::ClosedForm(ClosedFormStrategy::new(est.base_price_per_m2))
            }
        };
        let policy = BreakdownPolicy::resolve(est.breakdown, est.strategy);

        info!(
            strategy = est.strategy.as_str(),
            policy = ?policy,
            "CostEstimator initialized"
        );

        Ok(Self {
            strategy,
            policy,
            contribute_delay: Duration::from_millis(est.contribute_delay_ms),
            pinned_year: None,
        })
    }

    /// Replace the breakdown policy.
    pub fn with_policy(mut self, policy: BreakdownPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a fixed "current year" instead of the system clock.
    pub fn pin_current_year(mut self, year: i32) -> Self {
        self.pinned_year = Some(year);
        self
    }

    pub fn policy(&self) -> &BreakdownPolicy {
        &self.policy
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    fn current_year(&self) -> i32 {
        self.pinned_year.unwrap_or_else(|| Utc::now().year())
    }

    /// Load the model now rather than on the first estimation. A no-op for
    /// the closed-form strategy.
    pub async fn preload(&self) -> ObraResult<()> {
        match &self.strategy {
            Strategy::Model(strategy) => strategy.preload().await,
            Strategy::ClosedForm(_) => Ok(()),
        }
    }

    /// Estimate the cost of one house.
    pub async fn estimate(&self, house: &HouseDescription) -> ObraResult<EstimationResult> {
        let span = estimation_span!(self.strategy.kind().as_str());
        self.run_estimate(house).instrument(span).await
    }

    async fn run_estimate(&self, house: &HouseDescription) -> ObraResult<EstimationResult> {
        let total = self.strategy.total(house, self.current_year()).await?;
        let result = self.policy.apply(total);
        debug!(total, min = result.range.min, max = result.range.max, "estimation complete");
        Ok(result)
    }

    /// Parse a raw form and estimate it.
    pub async fn estimate_form(&self, form: &HouseForm) -> ObraResult<EstimationResult> {
        self.estimate(&form.parse()).await
    }

    /// Estimate two houses concurrently and compare totals.
    ///
    /// A zero first total gives a NaN percentage, never an error.
    pub async fn compare(
        &self,
        first: &HouseDescription,
        second: &HouseDescription,
    ) -> ObraResult<Comparison> {
        let span = comparison_span!(first.coverage, second.coverage);
        self.run_compare(first, second).instrument(span).await
    }

    async fn run_compare(
        &self,
        first: &HouseDescription,
        second: &HouseDescription,
    ) -> ObraResult<Comparison> {
        let (a, b) = tokio::join!(self.estimate(first), self.estimate(second));
        let comparison = Comparison::new(a?, b?);
        debug!(
            difference = comparison.difference,
            percentage = %comparison.percentage_display(),
            "comparison complete"
        );
        Ok(comparison)
    }

    /// Compare two roof coverages on the same base house.
    pub async fn compare_coverage(
        &self,
        base: &HouseDescription,
        first: CoverageMaterial,
        second: CoverageMaterial,
    ) -> ObraResult<Comparison> {
        self.compare(&base.with_coverage(first), &base.with_coverage(second))
            .await
    }

    /// Record a house (and optionally its real cost) as future training
    /// data. Nothing is persisted or learned yet; this logs the
    /// contribution, waits the configured delay, and reports success.
    pub async fn contribute(
        &self,
        house: &HouseDescription,
        actual_cost: Option<f64>,
    ) -> ObraResult<bool> {
        let contribution = Contribution::new(house.clone(), actual_cost);
        info!(?contribution, "contribution received");
        tokio::time::sleep(self.contribute_delay).await;
        Ok(true)
    }
}
