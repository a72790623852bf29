//! `restock-core`: ingestion-boundary primitives for replenishment analysis.
//!
//! This crate owns the **typing** of raw tabular input: untyped scalars are
//! coerced once, here, into explicit records with a fixed schema. It contains
//! no IO and no analytics.

pub mod error;
pub mod id;
pub mod row;
pub mod scalar;

pub use error::{AnalysisError, AnalysisResult, Dataset};
pub use id::{InventoryId, RunId};
pub use row::{InventoryItem, RawRow, SalesRecord, fields};
pub use scalar::{RawScalar, Scalar, format_quantity};
