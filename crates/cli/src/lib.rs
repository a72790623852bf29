//! `restock-cli`: file-based front end for the replenishment analysis.
//!
//! Loads the two datasets, runs one [`ReplenishmentJob`], and writes the
//! recommendation list. All analysis semantics live in `restock-analytics`.

pub mod cli;
pub mod export;
pub mod load;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use tracing::info;

use restock_analytics::{AnalysisJob, ReorderPolicy, ReplenishmentInput, ReplenishmentJob};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let inventory = load::read_csv_file(&cli.inventory)?;
    let sales = load::read_csv_file(&cli.sales)?;
    info!(
        inventory_rows = inventory.len(),
        sales_rows = sales.len(),
        "loaded datasets"
    );

    let job = ReplenishmentJob::new(ReplenishmentInput::new(inventory, sales))
        .with_policy(ReorderPolicy::default().with_safety_factor(cli.safety_factor));
    let report = job.run().context("replenishment analysis failed")?;

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    match cli.format {
        OutputFormat::Json => export::write_json(&mut out, &report.recommendations)?,
        OutputFormat::Csv => export::write_csv(&mut out, &report.recommendations)?,
    }
    out.flush()?;

    if cli.summary {
        export::write_summary(io::stderr().lock(), &report.summary)?;
    }

    info!(run_id = %report.run_id, "wrote recommendations");
    Ok(())
}
