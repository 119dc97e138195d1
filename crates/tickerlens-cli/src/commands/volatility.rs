use serde_json::json;
use tickerlens_core::analysis::volatility;
use tickerlens_core::{AnalysisConfig, ChartSpec, CsvExporter, Exporter};

use super::{load_batch, skipped_warning, CommandResult};
use crate::cli::VolatilityArgs;
use crate::error::CliError;

pub fn run(args: &VolatilityArgs, config: &AnalysisConfig) -> Result<CommandResult, CliError> {
    let (series, mut warnings) = load_batch(config)?;
    let analysis = volatility::analyze(&series);
    warnings.extend(skipped_warning(
        "insufficient history for rolling volatility",
        &analysis.skipped,
    ));

    if analysis.ranking.is_empty() {
        return Ok(CommandResult::ok(json!({ "rows": [] }))
            .with_warnings(warnings)
            .with_warning("no usable instruments; nothing to rank"));
    }

    let exporter = CsvExporter::new(&config.output_dir);
    let path = exporter.export("volatility", &analysis.ranking.to_table())?;

    let top = analysis.ranking.top(args.top);
    let chart = ChartSpec::bar(
        format!("Top {} Stocks by Annualized Volatility", top.len()),
        "Stock",
        "Annualized Volatility",
    );

    Ok(CommandResult::ok(json!({
        "metric": "volatility",
        "rows": top.rows,
        "total_instruments": analysis.ranking.len(),
    }))
    .with_render(top.to_table(), chart)
    .with_export(path)
    .with_warnings(warnings))
}
