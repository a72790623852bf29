//! DemandPredictor: a fixed, auditable near-term demand heuristic.
//!
//! Model:
//! - Start from the item's mean sales quantity.
//! - Scale down by profit margin (`1 - margin * margin_weight`).
//! - Scale up by sales variability (`1 + variability * variability_weight`).
//! - Round half-up and floor at `min_forecast`.

use serde::{Deserialize, Serialize};

use crate::par::map_items;
use crate::types::MergedRecord;

/// Heuristic weights for the demand forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    pub margin_weight: f64,
    pub variability_weight: f64,
    /// Lower bound of every forecast (must be >= 1).
    pub min_forecast: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            margin_weight: 0.1,
            variability_weight: 0.2,
            min_forecast: 1,
        }
    }
}

impl ForecastConfig {
    pub fn with_margin_weight(mut self, margin_weight: f64) -> Self {
        self.margin_weight = margin_weight;
        self
    }

    pub fn with_variability_weight(mut self, variability_weight: f64) -> Self {
        self.variability_weight = variability_weight;
        self
    }

    pub fn with_min_forecast(mut self, min_forecast: u64) -> Self {
        self.min_forecast = min_forecast;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DemandPredictor {
    config: ForecastConfig,
}

impl DemandPredictor {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// One forecast per record, same order.
    pub fn predict(&self, records: &[MergedRecord]) -> Vec<u64> {
        map_items(records, |r| self.forecast(r))
    }

    pub fn forecast(&self, record: &MergedRecord) -> u64 {
        let cfg = &self.config;
        let mut adjusted = record.stats.avg_sales_quantity;
        adjusted *= 1.0 - record.features.profit_margin * cfg.margin_weight;
        adjusted *= 1.0 + record.features.sales_variability * cfg.variability_weight;

        let rounded = round_half_up(adjusted);
        // `as` saturates; negatives and NaN land on 0 and are lifted by the floor.
        (rounded as u64).max(cfg.min_forecast)
    }
}

/// Half-up rounding for the non-negative range that can reach the output.
///
/// Negatives collapse to the forecast floor, so only `x >= 0` must be exact,
/// where `f64::round` agrees with half-up without the `x + 0.5` precision loss.
fn round_half_up(x: f64) -> f64 {
    if x.is_finite() { x.round() } else { 0.0 }
}
