//! Recommendation list -> JSON or CSV.

use std::io::Write;

use restock_analytics::{Recommendation, RunSummary, Status};

pub fn write_json<W: Write>(mut out: W, recommendations: &[Recommendation]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, recommendations)?;
    writeln!(out)?;
    Ok(())
}

/// CSV with the same column names as the JSON fields.
pub fn write_csv<W: Write>(out: W, recommendations: &[Recommendation]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for rec in recommendations {
        writer.serialize(rec)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_summary<W: Write>(mut out: W, summary: &RunSummary) -> anyhow::Result<()> {
    writeln!(out, "items:            {}", summary.total_items)?;
    writeln!(out, "total stock:      {}", summary.total_stock)?;
    writeln!(out, "predicted demand: {}", summary.total_predicted_demand)?;
    for status in Status::ALL {
        writeln!(out, "{:<17} {}", format!("{status}:"), summary.count(status))?;
    }
    writeln!(out, "actionable:       {}", summary.actionable())?;
    Ok(())
}
