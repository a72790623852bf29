//! The full replenishment run: merge, forecast, recommend.
//!
//! [`analyze`] is the pure pipeline; [`ReplenishmentJob`] wraps it with
//! configuration checks, a per-run tracing span, and the run report.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, info_span};

use restock_core::{AnalysisResult, RawRow, RunId};

use crate::job::AnalysisJob;
use crate::predictor::{DemandPredictor, ForecastConfig};
use crate::preprocess::DataPreprocessor;
use crate::recommend::{RecommendationEngine, ReorderPolicy};
use crate::result::{AnalysisReport, JobError};
use crate::types::Recommendation;

/// The two datasets of one analysis run, as untyped rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentInput {
    pub inventory: Vec<RawRow>,
    pub sales: Vec<RawRow>,
}

impl ReplenishmentInput {
    pub fn new(inventory: Vec<RawRow>, sales: Vec<RawRow>) -> Self {
        Self { inventory, sales }
    }
}

/// Run the three stages in order: merge, forecast, recommend.
///
/// Deterministic: identical input and configuration give identical output.
pub fn analyze(
    input: &ReplenishmentInput,
    forecast: ForecastConfig,
    policy: ReorderPolicy,
) -> AnalysisResult<Vec<Recommendation>> {
    let merged = DataPreprocessor::new().process(&input.inventory, &input.sales)?;
    debug!(records = merged.len(), "merged inventory with sales statistics");

    let demand = DemandPredictor::new(forecast).predict(&merged);
    debug!(forecasts = demand.len(), "predicted demand");

    let recommendations = RecommendationEngine::new(policy).recommend(&merged, &demand)?;
    debug!(recommendations = recommendations.len(), "generated recommendations");

    Ok(recommendations)
}

/// Replenishment analysis job for one inventory snapshot and its sales history.
#[derive(Debug, Clone)]
pub struct ReplenishmentJob {
    input: ReplenishmentInput,
    forecast: ForecastConfig,
    policy: ReorderPolicy,
}

impl ReplenishmentJob {
    pub fn new(input: ReplenishmentInput) -> Self {
        Self {
            input,
            forecast: ForecastConfig::default(),
            policy: ReorderPolicy::default(),
        }
    }

    pub fn with_forecast(mut self, forecast: ForecastConfig) -> Self {
        self.forecast = forecast;
        self
    }

    pub fn with_policy(mut self, policy: ReorderPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn validate(&self) -> Result<(), JobError> {
        ensure_non_negative("margin_weight", self.forecast.margin_weight)?;
        ensure_non_negative("variability_weight", self.forecast.variability_weight)?;
        ensure_non_negative("safety_factor", self.policy.safety_factor)?;
        if self.forecast.min_forecast < 1 {
            return Err(JobError::InvalidInput(
                "min_forecast must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn ensure_non_negative(name: &str, value: f64) -> Result<(), JobError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(JobError::InvalidInput(format!(
            "{name} must be a finite non-negative number (got {value})"
        )))
    }
}

impl AnalysisJob for ReplenishmentJob {
    type Input = ReplenishmentInput;
    type Output = AnalysisReport;

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<AnalysisReport, JobError> {
        self.validate()?;

        let run_id = RunId::new();
        let span = info_span!("replenishment_job", %run_id);
        let _guard = span.enter();

        let recommendations = analyze(&self.input, self.forecast, self.policy)?;
        let report = AnalysisReport::new(run_id, recommendations);

        info!(
            items = report.summary.total_items,
            urgent = report.summary.urgent,
            reorder = report.summary.reorder,
            ok = report.summary.ok,
            "replenishment analysis complete"
        );

        Ok(report.with_metadata(json!({
            "kind": "inventory.replenishment",
            "inventory_rows": self.input.inventory.len(),
            "sales_rows": self.input.sales.len(),
            "forecast": self.forecast,
            "policy": self.policy,
        })))
    }
}
