//! Delimited-text datasets -> untyped rows.
//!
//! Every cell is handed over as text; typing is the analysis core's job.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

use restock_core::{RawRow, RawScalar};

/// Read a CSV file with a header row.
pub fn read_csv_file(path: &Path) -> anyhow::Result<Vec<RawRow>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_csv(file).with_context(|| format!("reading {}", path.display()))
}

pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("malformed record {idx}"))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h, RawScalar::text(v)))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}
