//! Raw rows and their typed records.
//!
//! Coercion and required-field validation happen here, once per row, so the
//! analytics stages only ever see typed values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult, Dataset};
use crate::id::InventoryId;
use crate::scalar::{RawScalar, Scalar};

/// Field names as they appear in the input datasets.
pub mod fields {
    pub const INVENTORY_ID: &str = "InventoryId";
    pub const DESCRIPTION: &str = "Description";
    pub const ON_HAND_END: &str = "onHand_end";
    pub const AVG_PRICE: &str = "AvgPrice";
    pub const PURCHASE_PRICE: &str = "PurchasePrice";
    pub const LEAD_TIME: &str = "LeadTime";

    pub const SALES_DATE: &str = "SalesDate";
    pub const SALES_QUANTITY: &str = "SalesQuantity";
    pub const SALES_PRICE: &str = "SalesPrice";
    pub const SALES_DOLLARS: &str = "SalesDollars";
}

/// One flat key-value row with untyped values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(BTreeMap<String, RawScalar>);

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<RawScalar>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<RawScalar>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&RawScalar> {
        self.0.get(field)
    }
}

impl<K: Into<String>, V: Into<RawScalar>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One row of the current inventory snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub inventory_id: InventoryId,
    pub description: String,
    /// Current stock (`onHand_end`), finite and non-negative.
    pub on_hand: f64,
    pub avg_price: Option<f64>,
    pub purchase_price: Option<f64>,
    /// Replenishment lead time, finite and non-negative.
    pub lead_time: f64,
}

impl InventoryItem {
    /// Type a raw snapshot row.
    ///
    /// `InventoryId`, `onHand_end` and `LeadTime` are required; the price
    /// fields and `Description` are best-effort.
    pub fn from_raw(row: usize, raw: &RawRow) -> AnalysisResult<Self> {
        let reader = FieldReader::new(Dataset::Inventory, row, raw);
        Ok(Self {
            inventory_id: reader.inventory_id()?,
            description: reader.optional_text(fields::DESCRIPTION).unwrap_or_default(),
            on_hand: reader.non_negative(fields::ON_HAND_END)?,
            avg_price: reader.optional_number(fields::AVG_PRICE),
            purchase_price: reader.optional_number(fields::PURCHASE_PRICE),
            lead_time: reader.non_negative(fields::LEAD_TIME)?,
        })
    }
}

/// One historical sales transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub inventory_id: InventoryId,
    /// Kept verbatim; never coerced.
    pub sales_date: Option<String>,
    pub quantity: f64,
    pub price: f64,
    pub dollars: f64,
}

impl SalesRecord {
    pub fn from_raw(row: usize, raw: &RawRow) -> AnalysisResult<Self> {
        let reader = FieldReader::new(Dataset::Sales, row, raw);
        Ok(Self {
            inventory_id: reader.inventory_id()?,
            sales_date: raw.get(fields::SALES_DATE).and_then(RawScalar::as_text),
            quantity: reader.required_number(fields::SALES_QUANTITY)?,
            price: reader.required_number(fields::SALES_PRICE)?,
            dollars: reader.required_number(fields::SALES_DOLLARS)?,
        })
    }
}

struct FieldReader<'a> {
    dataset: Dataset,
    row: usize,
    raw: &'a RawRow,
}

impl<'a> FieldReader<'a> {
    fn new(dataset: Dataset, row: usize, raw: &'a RawRow) -> Self {
        Self { dataset, row, raw }
    }

    fn coerced(&self, field: &str) -> Option<Scalar> {
        self.raw.get(field).and_then(RawScalar::coerce)
    }

    fn inventory_id(&self) -> AnalysisResult<InventoryId> {
        self.coerced(fields::INVENTORY_ID)
            .map(|s| InventoryId::from_scalar(&s))
            .ok_or_else(|| AnalysisError::missing(self.dataset, self.row, fields::INVENTORY_ID))
    }

    fn required_number(&self, field: &'static str) -> AnalysisResult<f64> {
        match self.coerced(field) {
            None => Err(AnalysisError::missing(self.dataset, self.row, field)),
            Some(Scalar::Number(n)) => Ok(n),
            Some(Scalar::Text(text)) => Err(AnalysisError::invalid_numeric(
                self.dataset,
                self.row,
                field,
                text,
            )),
        }
    }

    fn non_negative(&self, field: &'static str) -> AnalysisResult<f64> {
        let n = self.required_number(field)?;
        if n < 0.0 {
            return Err(AnalysisError::out_of_range(self.dataset, self.row, field, n));
        }
        Ok(n)
    }

    fn optional_number(&self, field: &str) -> Option<f64> {
        self.coerced(field).and_then(|s| s.as_number())
    }

    fn optional_text(&self, field: &str) -> Option<String> {
        self.coerced(field).map(|s| s.to_text())
    }
}
