use serde_json::json;
use serde_json::Value;
use tickerlens_core::analysis::monthly;
use tickerlens_core::{AnalysisConfig, ChartSpec, CsvExporter, Exporter};

use super::{load_batch, skipped_warning, CommandResult};
use crate::cli::MonthlyArgs;
use crate::error::CliError;

pub fn run(args: &MonthlyArgs, config: &AnalysisConfig) -> Result<CommandResult, CliError> {
    if args.per_side == 0 {
        return Err(CliError::Command(String::from(
            "--per-side must be greater than zero",
        )));
    }

    let (series, mut warnings) = load_batch(config)?;
    let analysis = monthly::analyze(&series, args.per_side);
    warnings.extend(skipped_warning(
        "fewer than two month-end observations",
        &analysis.skipped,
    ));

    if analysis.months.is_empty() {
        return Ok(CommandResult::ok(json!({ "months": [] }))
            .with_warnings(warnings)
            .with_warning("no month with a prior month-end; nothing to rank"));
    }

    let exporter = CsvExporter::new(&config.output_dir);
    let mut result = CommandResult::ok(Value::Null).with_warnings(warnings);
    let mut months_payload = Vec::new();

    // One export file and one chart per month; the export set is not
    // atomic across months.
    for movers in &analysis.months {
        let table = movers.to_table();
        let path = exporter.export(&movers.export_name(), &table)?;
        result = result.with_export(path);

        let chart = ChartSpec::grouped_bar(
            format!("Gainers and Losers for {}", movers.month.display_label()),
            "Stock",
            "Percentage Return",
        );
        result = result.with_render(table, chart);

        months_payload.push(json!({
            "month": movers.month.export_label(),
            "gainers": movers.gainers,
            "losers": movers.losers,
        }));
    }

    result.data = json!({
        "metric": "monthly_gainers_losers",
        "months": months_payload,
    });
    Ok(result)
}
