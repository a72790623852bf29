//! Run-level overview of a recommendation set.

use serde::{Deserialize, Serialize};

use crate::types::{Recommendation, Status};

/// Aggregate figures for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_items: usize,
    pub total_stock: f64,
    pub total_predicted_demand: u64,
    pub urgent: usize,
    pub reorder: usize,
    pub ok: usize,
}

impl RunSummary {
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        recommendations
            .iter()
            .fold(Self::default(), |mut acc, rec| {
                acc.total_items += 1;
                acc.total_stock += rec.current_stock;
                acc.total_predicted_demand =
                    acc.total_predicted_demand.saturating_add(rec.predicted_demand);
                match rec.status {
                    Status::UrgentRestock => acc.urgent += 1,
                    Status::Reorder => acc.reorder += 1,
                    Status::Ok => acc.ok += 1,
                }
                acc
            })
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::UrgentRestock => self.urgent,
            Status::Reorder => self.reorder,
            Status::Ok => self.ok,
        }
    }

    /// Items needing any action (urgent or reorder).
    pub fn actionable(&self) -> usize {
        self.urgent + self.reorder
    }
}
