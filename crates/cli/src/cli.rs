use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use restock_observability::LogFormat;

/// Restock CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "restock",
    version,
    about = "Replenishment recommendations from an inventory snapshot and its sales history"
)]
pub struct Cli {
    /// Inventory snapshot (CSV with header row)
    #[arg(long)]
    pub inventory: PathBuf,

    /// Sales transactions (CSV with header row)
    #[arg(long)]
    pub sales: PathBuf,

    /// Output format for the recommendation list
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write output here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also print the run summary to stderr
    #[arg(long)]
    pub summary: bool,

    /// Safety stock as a fraction of lead-time demand
    #[arg(long, env = "RESTOCK_SAFETY_FACTOR", default_value_t = 0.2)]
    pub safety_factor: f64,

    /// Log output format (json or compact)
    #[arg(long, default_value = "json")]
    pub log_format: LogFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}
