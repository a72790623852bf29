//! Records flowing between the pipeline stages.

use serde::{Deserialize, Serialize};

use restock_core::{InventoryId, InventoryItem};

/// Per-item aggregate of the sales history.
///
/// Items without any sales rows get [`SalesStatistics::default`] (all zero),
/// never an absent record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesStatistics {
    pub total_sales_quantity: f64,
    pub avg_sales_quantity: f64,
    /// Population standard deviation.
    pub std_sales_quantity: f64,
    pub avg_sales_price: f64,
    pub std_sales_price: f64,
    pub total_sales_dollars: f64,
}

/// Features derived from an item and its statistics, each zero-guarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DerivedFeatures {
    pub days_of_stock: f64,
    pub profit_margin: f64,
    pub sales_variability: f64,
}

/// One snapshot item joined with its sales statistics and derived features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub item: InventoryItem,
    pub stats: SalesStatistics,
    pub features: DerivedFeatures,
}

impl MergedRecord {
    pub fn inventory_id(&self) -> &InventoryId {
        &self.item.inventory_id
    }
}

/// Replenishment status, in classification priority order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    UrgentRestock,
    Reorder,
    Ok,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::UrgentRestock, Status::Reorder, Status::Ok];

    /// First matching rule wins; total over all inputs.
    pub fn classify(current_stock: f64, safety_stock: u64, reorder_point: u64) -> Self {
        if current_stock < safety_stock as f64 {
            Status::UrgentRestock
        } else if current_stock < reorder_point as f64 {
            Status::Reorder
        } else {
            Status::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::UrgentRestock => "URGENT_RESTOCK",
            Status::Reorder => "REORDER",
            Status::Ok => "OK",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final per-item output; field names match the downstream table columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "InventoryId")]
    pub inventory_id: InventoryId,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Current_Stock", serialize_with = "quantity::serialize")]
    pub current_stock: f64,
    #[serde(rename = "Predicted_Demand")]
    pub predicted_demand: u64,
    #[serde(rename = "Safety_Stock")]
    pub safety_stock: u64,
    #[serde(rename = "Reorder_Point")]
    pub reorder_point: u64,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Action")]
    pub action: String,
}

mod quantity {
    use serde::Serializer;

    // Largest integer magnitude an f64 represents exactly.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    /// Integral quantities go out as integers (`30`, not `30.0`).
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}
