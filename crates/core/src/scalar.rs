//! Untyped input scalars and the single numeric-coercion rule.

use serde::{Deserialize, Serialize};

/// A cell value as delivered by the ingestion layer.
///
/// Deserializes from JSON `"12"`, `12` or `null` alike; the analysis never
/// trusts the caller to have typed the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Null,
    Number(f64),
    Text(String),
}

/// A cell value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl RawScalar {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Apply the numeric coercion rule.
    ///
    /// - Text that parses (after trimming) as a finite number becomes `Number`.
    /// - Any other non-blank text is kept unchanged as `Text`.
    /// - Blank text and `Null` are absent (`None`), never zero.
    pub fn coerce(&self) -> Option<Scalar> {
        match self {
            RawScalar::Null => None,
            RawScalar::Number(n) if n.is_finite() => Some(Scalar::Number(*n)),
            RawScalar::Number(n) => Some(Scalar::Text(n.to_string())),
            RawScalar::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() => Some(Scalar::Number(n)),
                    _ => Some(Scalar::Text(s.clone())),
                }
            }
        }
    }

    /// Read the value as text without numeric coercion (used for `SalesDate`).
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawScalar::Null => None,
            RawScalar::Number(n) => Some(format_quantity(*n)),
            RawScalar::Text(s) if s.trim().is_empty() => None,
            RawScalar::Text(s) => Some(s.clone()),
        }
    }
}

impl From<&str> for RawScalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawScalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawScalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawScalar {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl Scalar {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }

    /// Text rendering: numbers without a trailing `.0`, text verbatim.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Number(n) => format_quantity(*n),
            Scalar::Text(s) => s.clone(),
        }
    }
}

/// Render a quantity the way it reads in action text: `24`, not `24.0`.
pub fn format_quantity(n: f64) -> String {
    // Normalizes -0.
    let n = if n == 0.0 { 0.0 } else { n };
    n.to_string()
}
