//! CLI argument definitions for tickerlens.
//!
//! One subcommand per analysis operation:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `volatility` | Annualized rolling volatility ranking |
//! | `cumulative` | Total compounded return ranking |
//! | `sectors` | Sector-averaged full-period returns |
//! | `correlation` | Pairwise correlation matrix for selected symbols |
//! | `monthly` | Month-by-month top gainers and losers |
//!
//! # Examples
//!
//! ```bash
//! tickerlens --data-dir data volatility --top 10
//! tickerlens --data-dir data --sector-file sector.csv sectors
//! tickerlens --data-dir data correlation INFY TCS HDFCBANK
//! tickerlens --data-dir data monthly --per-side 5 --format json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Descriptive statistics over per-instrument daily closing-price series.
///
/// Reads one CSV file per instrument from the data directory, computes the
/// requested statistic, exports the full result table under the output
/// directory and prints a ranked view.
#[derive(Debug, Parser)]
#[command(
    name = "tickerlens",
    author,
    version,
    about = "Descriptive statistics over daily closing-price series"
)]
pub struct Cli {
    /// Directory containing one CSV file per instrument (date/close columns).
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Sector reference CSV with symbol and sector columns. Required by
    /// the `sectors` command.
    #[arg(long, global = true)]
    pub sector_file: Option<PathBuf>,

    /// Directory receiving the exported result tables.
    #[arg(long, global = true, default_value = "results")]
    pub out_dir: PathBuf,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text tables for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank instruments by annualized 30-observation rolling volatility.
    Volatility(VolatilityArgs),

    /// Rank instruments by total compounded return over their history.
    Cumulative(CumulativeArgs),

    /// Average full-period returns per sector and rank sectors.
    Sectors(SectorsArgs),

    /// Pairwise correlation matrix of closing prices for selected symbols.
    ///
    /// Passing no symbols is treated as an empty selection and produces a
    /// warning prompt, not an error.
    Correlation(CorrelationArgs),

    /// Month-end resampled gainers/losers, one table per month.
    Monthly(MonthlyArgs),
}

/// Arguments for the `volatility` command.
#[derive(Debug, Args)]
pub struct VolatilityArgs {
    /// Number of instruments to display (clamped to the result size).
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

/// Arguments for the `cumulative` command.
#[derive(Debug, Args)]
pub struct CumulativeArgs {
    /// Number of instruments to display (clamped to the result size).
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

/// Arguments for the `sectors` command.
#[derive(Debug, Args)]
pub struct SectorsArgs {
    /// Number of sectors to display (clamped to the result size).
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Join instruments to sector symbols by 2-character prefix instead of
    /// exact match. Collision-prone; only for legacy data sets whose file
    /// stems merely share a prefix with the reference symbols.
    #[arg(long, default_value_t = false)]
    pub prefix_join: bool,
}

/// Arguments for the `correlation` command.
#[derive(Debug, Args)]
pub struct CorrelationArgs {
    /// Instrument symbols to correlate (multi-select, no default).
    pub symbols: Vec<String>,
}

/// Arguments for the `monthly` command.
#[derive(Debug, Args)]
pub struct MonthlyArgs {
    /// Instruments reported on each side (gainers and losers) per month.
    #[arg(long, default_value_t = 5)]
    pub per_side: usize,
}
