//! RecommendationEngine: safety stock, reorder point, status and action text.

use serde::{Deserialize, Serialize};

use restock_core::{AnalysisError, AnalysisResult, format_quantity};

use crate::par::map_pairs;
use crate::types::{MergedRecord, Recommendation, Status};

/// Reorder policy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReorderPolicy {
    /// Safety stock as a fraction of lead-time demand.
    pub safety_factor: f64,
}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self { safety_factor: 0.2 }
    }
}

impl ReorderPolicy {
    pub fn with_safety_factor(mut self, safety_factor: f64) -> Self {
        self.safety_factor = safety_factor;
        self
    }

    /// `floor(demand * lead_time * safety_factor)`.
    pub fn safety_stock(&self, demand: u64, lead_time: f64) -> u64 {
        (demand as f64 * lead_time * self.safety_factor).floor() as u64
    }

    /// `floor(demand * lead_time + safety_stock)`; never below the safety stock.
    pub fn reorder_point(&self, demand: u64, lead_time: f64, safety_stock: u64) -> u64 {
        (demand as f64 * lead_time + safety_stock as f64).floor() as u64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    policy: ReorderPolicy,
}

impl RecommendationEngine {
    pub fn new(policy: ReorderPolicy) -> Self {
        Self { policy }
    }

    /// Pair records with forecasts by index.
    ///
    /// Element `i` of `demand` must describe `records[i]`; nothing is
    /// re-matched by id. A length mismatch is an [`AnalysisError::Alignment`].
    pub fn recommend(
        &self,
        records: &[MergedRecord],
        demand: &[u64],
    ) -> AnalysisResult<Vec<Recommendation>> {
        if records.len() != demand.len() {
            return Err(AnalysisError::alignment(records.len(), demand.len()));
        }
        Ok(map_pairs(records, demand, |r, d| self.recommend_item(r, *d)))
    }

    pub fn recommend_item(&self, record: &MergedRecord, predicted_demand: u64) -> Recommendation {
        let current_stock = record.item.on_hand;
        let lead_time = record.item.lead_time;
        let safety_stock = self.policy.safety_stock(predicted_demand, lead_time);
        let reorder_point = self.policy.reorder_point(predicted_demand, lead_time, safety_stock);

        let status = Status::classify(current_stock, safety_stock, reorder_point);
        // Deficit is intentionally not clamped.
        let deficit = reorder_point as f64 - current_stock;

        Recommendation {
            inventory_id: record.item.inventory_id.clone(),
            description: record.item.description.clone(),
            current_stock,
            predicted_demand,
            safety_stock,
            reorder_point,
            status,
            action: action_text(status, deficit),
        }
    }
}

fn action_text(status: Status, deficit: f64) -> String {
    match status {
        Status::UrgentRestock => {
            format!("Order {} units immediately", format_quantity(deficit))
        }
        Status::Reorder => format!("Plan to order {} units", format_quantity(deficit)),
        Status::Ok => "No action needed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DerivedFeatures, SalesStatistics};
    use restock_core::{InventoryId, InventoryItem};

    fn record(on_hand: f64, lead_time: f64) -> MergedRecord {
        MergedRecord {
            item: InventoryItem {
                inventory_id: InventoryId::parse("TEST").unwrap(),
                description: "Test item".to_string(),
                on_hand,
                avg_price: None,
                purchase_price: None,
                lead_time,
            },
            stats: SalesStatistics::default(),
            features: DerivedFeatures::default(),
        }
    }

    #[test]
    fn reorder_when_between_safety_and_reorder_point() {
        let rec = RecommendationEngine::default().recommend_item(&record(30.0, 5.0), 9);
        assert_eq!(rec.safety_stock, 9);
        assert_eq!(rec.reorder_point, 54);
        assert_eq!(rec.status, Status::Reorder);
        assert_eq!(rec.action, "Plan to order 24 units");
    }

    #[test]
    fn urgent_when_below_safety_stock() {
        let rec = RecommendationEngine::default().recommend_item(&record(3.0, 5.0), 9);
        assert_eq!(rec.status, Status::UrgentRestock);
        assert_eq!(rec.action, "Order 51 units immediately");
    }

    #[test]
    fn ok_at_or_above_reorder_point() {
        let rec = RecommendationEngine::default().recommend_item(&record(10.0, 2.0), 2);
        assert_eq!(rec.safety_stock, 0);
        assert_eq!(rec.reorder_point, 4);
        assert_eq!(rec.status, Status::Ok);
        assert_eq!(rec.action, "No action needed");

        let rec = RecommendationEngine::default().recommend_item(&record(4.0, 2.0), 2);
        assert_eq!(rec.status, Status::Ok);
    }

    #[test]
    fn zero_lead_time_needs_no_stock() {
        let rec = RecommendationEngine::default().recommend_item(&record(0.0, 0.0), 12);
        assert_eq!(rec.safety_stock, 0);
        assert_eq!(rec.reorder_point, 0);
        assert_eq!(rec.status, Status::Ok);
    }

    #[test]
    fn fractional_stock_shows_fractional_deficit() {
        let rec = RecommendationEngine::default().recommend_item(&record(30.5, 5.0), 9);
        assert_eq!(rec.action, "Plan to order 23.5 units");
    }

    #[test]
    fn safety_factor_is_configurable() {
        let engine = RecommendationEngine::new(ReorderPolicy::default().with_safety_factor(0.5));
        let rec = engine.recommend_item(&record(0.0, 4.0), 10);
        assert_eq!(rec.safety_stock, 20);
        assert_eq!(rec.reorder_point, 60);
    }

    #[test]
    fn misaligned_inputs_are_rejected() {
        let err = RecommendationEngine::default()
            .recommend(&[record(1.0, 1.0), record(2.0, 1.0)], &[1])
            .unwrap_err();
        assert_eq!(err, AnalysisError::alignment(2, 1));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: reorder point >= safety stock >= 0, status matches the rule table.
            #[test]
            fn thresholds_are_ordered_and_status_is_total(
                on_hand in 0.0f64..10_000.0f64,
                lead_time in 0.0f64..60.0f64,
                demand in 1u64..10_000u64,
            ) {
                let rec = RecommendationEngine::default().recommend_item(&record(on_hand, lead_time), demand);
                prop_assert!(rec.reorder_point >= rec.safety_stock);
                prop_assert_eq!(
                    rec.status,
                    Status::classify(rec.current_stock, rec.safety_stock, rec.reorder_point)
                );
                match rec.status {
                    Status::UrgentRestock => prop_assert!(rec.action.starts_with("Order ")),
                    Status::Reorder => prop_assert!(rec.action.starts_with("Plan to order ")),
                    Status::Ok => prop_assert_eq!(rec.action.as_str(), "No action needed"),
                }
            }
        }
    }
}
