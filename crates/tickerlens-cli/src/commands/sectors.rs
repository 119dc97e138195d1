use serde_json::json;
use tickerlens_core::analysis::sector;
use tickerlens_core::{
    AnalysisConfig, ChartSpec, CsvExporter, Exporter, JoinStrategy, SectorMap,
};

use super::{load_batch, skipped_warning, CommandResult};
use crate::cli::SectorsArgs;
use crate::error::CliError;

pub fn run(args: &SectorsArgs, config: &AnalysisConfig) -> Result<CommandResult, CliError> {
    let Some(sector_file) = &config.sector_file else {
        return Err(CliError::Command(String::from(
            "--sector-file is required for sector analysis",
        )));
    };

    let strategy = if args.prefix_join {
        JoinStrategy::Prefix(2)
    } else {
        JoinStrategy::ExactSymbol
    };
    let sectors = SectorMap::from_csv(sector_file, strategy)?;

    let (series, mut warnings) = load_batch(config)?;
    let analysis = sector::analyze(&series, &sectors);
    warnings.extend(skipped_warning(
        "no sector reference match",
        &analysis.unmatched,
    ));
    warnings.extend(skipped_warning("empty series", &analysis.skipped));

    if analysis.ranking.is_empty() {
        return Ok(CommandResult::ok(json!({ "rows": [] }))
            .with_warnings(warnings)
            .with_warning("no instruments joined to a sector; nothing to rank"));
    }

    let exporter = CsvExporter::new(&config.output_dir);
    let path = exporter.export("sector_returns", &analysis.ranking.to_table())?;

    let top = analysis.ranking.top(args.top);
    let chart = ChartSpec::bar(
        format!("Top {} Sectors by Average Return", top.len()),
        "Sector",
        "Average Full-Period Return",
    );

    Ok(CommandResult::ok(json!({
        "metric": "sector_returns",
        "rows": top.rows,
        "total_sectors": analysis.ranking.len(),
    }))
    .with_render(top.to_table(), chart)
    .with_export(path)
    .with_warnings(warnings))
}
