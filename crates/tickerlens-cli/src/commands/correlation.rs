use serde_json::json;
use tickerlens_core::analysis::correlation;
use tickerlens_core::{
    AnalysisConfig, AnalysisError, ChartSpec, CsvExporter, Exporter, Symbol,
};

use super::{load_batch, CommandResult};
use crate::cli::CorrelationArgs;
use crate::error::CliError;

pub fn run(args: &CorrelationArgs, config: &AnalysisConfig) -> Result<CommandResult, CliError> {
    let selection = args
        .symbols
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()
        .map_err(CliError::Validation)?;

    let (series, mut warnings) = load_batch(config)?;

    let analysis = match correlation::analyze(&series, &selection) {
        Ok(analysis) => analysis,
        // An empty selection asks the user to pick symbols; it is a
        // prompt, not a failure.
        Err(AnalysisError::EmptySelection) => {
            return Ok(CommandResult::ok(json!({ "matrix": null }))
                .with_warning("select at least one symbol to compute correlations"));
        }
        Err(AnalysisError::Validation(error)) => return Err(CliError::Validation(error)),
    };

    if !analysis.unknown.is_empty() {
        warnings.push(format!(
            "no data for selected symbol(s): {}",
            analysis.unknown.join(", ")
        ));
    }

    if analysis.matrix.is_empty() {
        return Ok(CommandResult::ok(json!({ "matrix": null }))
            .with_warnings(warnings)
            .with_warning("no data available for the selected symbols"));
    }

    let exporter = CsvExporter::new(&config.output_dir);
    let path = exporter.export("correlation_matrix", &analysis.matrix.to_table())?;

    let chart = ChartSpec::heatmap("Stock Price Correlation Heatmap");

    Ok(CommandResult::ok(json!({
        "metric": "correlation",
        "symbols": analysis.matrix.symbols,
        "matrix": analysis.matrix.values,
    }))
    .with_render(analysis.matrix.to_table(), chart)
    .with_export(path)
    .with_warnings(warnings))
}
