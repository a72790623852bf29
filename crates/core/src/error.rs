//! Analysis error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the analysis pipeline.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Which input dataset a row came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Inventory,
    Sales,
}

impl core::fmt::Display for Dataset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Dataset::Inventory => f.write_str("inventory"),
            Dataset::Sales => f.write_str("sales"),
        }
    }
}

/// Batch-level analysis failure.
///
/// Every variant is fatal for the whole batch: no recommendation list is
/// produced once any of these is detected. `row` is the 0-based index of the
/// offending row within its dataset.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// A required field is absent (or blank) on a row.
    #[error("{dataset} row {row}: missing required field `{field}`")]
    MissingField {
        dataset: Dataset,
        row: usize,
        field: &'static str,
    },

    /// A required numeric field holds text that does not parse as a number.
    #[error("{dataset} row {row}: field `{field}` is not numeric (got {value:?})")]
    InvalidNumeric {
        dataset: Dataset,
        row: usize,
        field: &'static str,
        value: String,
    },

    /// A required numeric field parsed but lies outside its domain (e.g. negative stock).
    #[error("{dataset} row {row}: field `{field}` is out of range ({value})")]
    OutOfRange {
        dataset: Dataset,
        row: usize,
        field: &'static str,
        value: f64,
    },

    /// Demand predictions are not index-aligned with the merged records.
    #[error("alignment mismatch: {records} merged record(s) but {predictions} demand prediction(s)")]
    Alignment { records: usize, predictions: usize },
}

impl AnalysisError {
    pub fn missing(dataset: Dataset, row: usize, field: &'static str) -> Self {
        Self::MissingField {
            dataset,
            row,
            field,
        }
    }

    pub fn invalid_numeric(
        dataset: Dataset,
        row: usize,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidNumeric {
            dataset,
            row,
            field,
            value: value.into(),
        }
    }

    pub fn out_of_range(dataset: Dataset, row: usize, field: &'static str, value: f64) -> Self {
        Self::OutOfRange {
            dataset,
            row,
            field,
            value,
        }
    }

    pub fn alignment(records: usize, predictions: usize) -> Self {
        Self::Alignment {
            records,
            predictions,
        }
    }

    /// The offending field name, when the error is tied to a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidNumeric { field, .. }
            | Self::OutOfRange { field, .. } => Some(field),
            Self::Alignment { .. } => None,
        }
    }
}
