//! DataPreprocessor: typed rows -> per-item merged feature records.

use std::collections::HashMap;

use tracing::{debug, warn};

use restock_core::{AnalysisResult, InventoryId, InventoryItem, RawRow, SalesRecord};

use crate::par::map_items;
use crate::stats::{guarded_ratio, mean, std_dev_population};
use crate::types::{DerivedFeatures, MergedRecord, SalesStatistics};

/// Sales statistics keyed by inventory id.
pub type StatisticsMap = HashMap<InventoryId, SalesStatistics>;

/// Merges the inventory snapshot with aggregated sales history.
///
/// Stateless: the snapshot is authoritative for which items exist, and the
/// output has the same length and order as the inventory input.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataPreprocessor;

impl DataPreprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Type and validate both datasets, aggregate sales, and merge.
    ///
    /// All-or-nothing: the first invalid row (inventory first, then sales, in
    /// row order) fails the whole batch.
    pub fn process(
        &self,
        inventory: &[RawRow],
        sales: &[RawRow],
    ) -> AnalysisResult<Vec<MergedRecord>> {
        let items = type_rows(inventory, InventoryItem::from_raw)?;
        let sales = type_rows(sales, SalesRecord::from_raw)?;
        debug!(
            items = items.len(),
            sales = sales.len(),
            "typed input datasets"
        );

        let stats = self.aggregate(&sales);
        report_orphans(&items, &stats);

        Ok(self.merge(&items, &stats))
    }

    /// Group sales by item and compute per-group statistics.
    ///
    /// Single sequential pass; sums accumulate in row order.
    pub fn aggregate(&self, sales: &[SalesRecord]) -> StatisticsMap {
        #[derive(Default)]
        struct Group {
            quantities: Vec<f64>,
            prices: Vec<f64>,
            dollars: f64,
        }

        let mut groups: HashMap<&InventoryId, Group> = HashMap::new();
        for sale in sales {
            let group = groups.entry(&sale.inventory_id).or_default();
            group.quantities.push(sale.quantity);
            group.prices.push(sale.price);
            group.dollars += sale.dollars;
        }

        groups
            .into_iter()
            .map(|(id, g)| {
                let stats = SalesStatistics {
                    total_sales_quantity: g.quantities.iter().sum(),
                    avg_sales_quantity: mean(&g.quantities),
                    std_sales_quantity: std_dev_population(&g.quantities),
                    avg_sales_price: mean(&g.prices),
                    std_sales_price: std_dev_population(&g.prices),
                    total_sales_dollars: g.dollars,
                };
                (id.clone(), stats)
            })
            .collect()
    }

    /// Join each item with its statistics (zero when absent) and derive features.
    pub fn merge(&self, items: &[InventoryItem], stats: &StatisticsMap) -> Vec<MergedRecord> {
        map_items(items, |item| {
            let stats = stats
                .get(&item.inventory_id)
                .copied()
                .unwrap_or_default();
            MergedRecord {
                item: item.clone(),
                features: derive_features(item, &stats),
                stats,
            }
        })
    }
}

/// Zero-guarded feature derivation for one item.
pub fn derive_features(item: &InventoryItem, stats: &SalesStatistics) -> DerivedFeatures {
    let profit_margin = match (item.avg_price, item.purchase_price) {
        (Some(avg), Some(purchase)) => guarded_ratio(avg - purchase, avg),
        _ => 0.0,
    };

    DerivedFeatures {
        days_of_stock: guarded_ratio(item.on_hand, stats.avg_sales_quantity),
        profit_margin,
        sales_variability: guarded_ratio(stats.std_sales_quantity, stats.avg_sales_quantity),
    }
}

fn type_rows<T>(
    rows: &[RawRow],
    type_row: impl Fn(usize, &RawRow) -> AnalysisResult<T>,
) -> AnalysisResult<Vec<T>> {
    rows.iter()
        .enumerate()
        .map(|(idx, raw)| type_row(idx, raw))
        .collect()
}

fn report_orphans(items: &[InventoryItem], stats: &StatisticsMap) {
    let known: std::collections::HashSet<&InventoryId> =
        items.iter().map(|i| &i.inventory_id).collect();
    let orphans = stats.keys().filter(|id| !known.contains(id)).count();
    if orphans > 0 {
        warn!(
            orphans,
            "sales history references items absent from the snapshot; dropping them"
        );
    }
}
