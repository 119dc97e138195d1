use serde_json::json;
use tickerlens_core::{ChartKind, ChartSpec, Presenter, Table};

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = json!({
                "data": result.data,
                "warnings": result.warnings,
                "exported": result
                    .exported
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>(),
            });
            let rendered = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            println!("{rendered}");
        }
        OutputFormat::Table => {
            if !result.warnings.is_empty() {
                println!("warnings:");
                for warning in &result.warnings {
                    println!("  - {warning}");
                }
            }

            let mut presenter = TextPresenter;
            for (table, chart) in &result.renders {
                presenter.present(table, chart);
            }

            if !result.exported.is_empty() {
                println!("exported:");
                for path in &result.exported {
                    println!("  - {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Terminal sink for (table, chart) pairs.
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present(&mut self, table: &Table, chart: &ChartSpec) {
        println!();
        println!("{} [{}]", chart.title, kind_label(chart.kind));
        if !chart.x_label.is_empty() {
            println!("{} vs {}", chart.x_label, chart.y_label);
        }

        let widths = column_widths(table);
        print_row(&table.columns, &widths);
        for row in &table.rows {
            print_row(row, &widths);
        }
    }
}

fn kind_label(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "bar",
        ChartKind::GroupedBar => "grouped bar",
        ChartKind::Heatmap => "heatmap",
    }
}

fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.columns.iter().map(String::len).collect();
    for row in &table.rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.len());
            }
        }
    }
    widths
}

fn print_row(cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}
