mod correlation;
mod cumulative;
mod monthly;
mod sectors;
mod volatility;

use std::path::PathBuf;

use serde_json::Value;
use tickerlens_core::{
    AnalysisConfig, ChartSpec, CsvLoader, PriceSeries, Table,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Outcome of one analysis command: JSON payload, renderable
/// (table, chart) pairs, accumulated warnings and exported files.
pub struct CommandResult {
    pub data: Value,
    pub renders: Vec<(Table, ChartSpec)>,
    pub warnings: Vec<String>,
    pub exported: Vec<PathBuf>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            renders: Vec::new(),
            warnings: Vec::new(),
            exported: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_render(mut self, table: Table, chart: ChartSpec) -> Self {
        self.renders.push((table, chart));
        self
    }

    pub fn with_export(mut self, path: PathBuf) -> Self {
        self.exported.push(path);
        self
    }
}

pub fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let mut config = AnalysisConfig::new(&cli.data_dir, &cli.out_dir);
    if let Some(sector_file) = &cli.sector_file {
        config = config.with_sector_file(sector_file);
    }

    match &cli.command {
        Command::Volatility(args) => volatility::run(args, &config),
        Command::Cumulative(args) => cumulative::run(args, &config),
        Command::Sectors(args) => sectors::run(args, &config),
        Command::Correlation(args) => correlation::run(args, &config),
        Command::Monthly(args) => monthly::run(args, &config),
    }
}

/// Load every instrument series, folding per-file problems into warnings.
fn load_batch(config: &AnalysisConfig) -> Result<(Vec<PriceSeries>, Vec<String>), CliError> {
    let loader = CsvLoader::new(&config.data_dir);
    let batch = loader.load_dir()?;

    let mut warnings = batch.skipped;
    for report in &batch.reports {
        if report.has_invalid_rows() {
            warnings.push(format!(
                "{}: dropped {} row(s) with invalid dates and {} with invalid closes",
                report.file, report.rows_invalid_date, report.rows_invalid_close
            ));
        }
    }

    Ok((batch.series, warnings))
}

fn skipped_warning(context: &str, skipped: &[String]) -> Option<String> {
    if skipped.is_empty() {
        None
    } else {
        Some(format!("{context}: {}", skipped.join(", ")))
    }
}
