use serde_json::json;
use tickerlens_core::analysis::cumulative;
use tickerlens_core::{AnalysisConfig, ChartSpec, CsvExporter, Exporter};

use super::{load_batch, skipped_warning, CommandResult};
use crate::cli::CumulativeArgs;
use crate::error::CliError;

pub fn run(args: &CumulativeArgs, config: &AnalysisConfig) -> Result<CommandResult, CliError> {
    let (series, mut warnings) = load_batch(config)?;
    let analysis = cumulative::analyze(&series);
    warnings.extend(skipped_warning(
        "no return observations",
        &analysis.skipped,
    ));

    if analysis.ranking.is_empty() {
        return Ok(CommandResult::ok(json!({ "rows": [] }))
            .with_warnings(warnings)
            .with_warning("no usable instruments; nothing to rank"));
    }

    let exporter = CsvExporter::new(&config.output_dir);
    let path = exporter.export("cumulative_return", &analysis.ranking.to_table())?;

    let top = analysis.ranking.top(args.top);
    let chart = ChartSpec::bar(
        format!("Top {} Stocks by Cumulative Return", top.len()),
        "Stock",
        "Cumulative Return",
    );

    Ok(CommandResult::ok(json!({
        "metric": "cumulative_return",
        "rows": top.rows,
        "total_instruments": analysis.ranking.len(),
    }))
    .with_render(top.to_table(), chart)
    .with_export(path)
    .with_warnings(warnings))
}
