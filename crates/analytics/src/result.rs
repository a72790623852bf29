use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use restock_core::{AnalysisError, RunId};

use crate::summary::RunSummary;
use crate::types::Recommendation;

/// Output of one replenishment analysis run.
///
/// `run_id` and `generated_at` identify the run; everything else is a pure
/// function of the input datasets and configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub summary: RunSummary,
    pub recommendations: Vec<Recommendation>,

    /// Free-form metadata (heuristic parameters, counts).
    pub metadata: JsonValue,
}

impl AnalysisReport {
    pub fn new(run_id: RunId, recommendations: Vec<Recommendation>) -> Self {
        Self {
            run_id,
            generated_at: Utc::now(),
            summary: RunSummary::from_recommendations(&recommendations),
            recommendations,
            metadata: JsonValue::Null,
        }
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error("invalid job input: {0}")]
    InvalidInput(String),

    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}
