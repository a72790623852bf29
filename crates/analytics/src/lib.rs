//! `restock-analytics`
//!
//! **Responsibility:** the replenishment analysis pipeline.
//!
//! Data flows strictly forward, one stage per module:
//! - [`preprocess`]: raw rows -> merged feature records
//! - [`predictor`]: merged records -> integer demand forecasts
//! - [`recommend`]: records + forecasts -> recommendations
//!
//! Every stage is pure and synchronous. Nothing is persisted between runs.

pub mod job;
mod par;
pub mod predictor;
pub mod preprocess;
pub mod recommend;
pub mod replenishment;
pub mod result;
pub mod stats;
pub mod summary;
pub mod types;

pub use job::AnalysisJob;
pub use predictor::{DemandPredictor, ForecastConfig};
pub use preprocess::{DataPreprocessor, StatisticsMap};
pub use recommend::{RecommendationEngine, ReorderPolicy};
pub use replenishment::{ReplenishmentInput, ReplenishmentJob, analyze};
pub use result::{AnalysisReport, JobError};
pub use summary::RunSummary;
pub use types::{DerivedFeatures, MergedRecord, Recommendation, SalesStatistics, Status};
