use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;
use tracing::debug;

use crate::analysis::{format_metric, pearson};
use crate::domain::{PriceSeries, Symbol};
use crate::error::AnalysisError;
use crate::export::Table;

/// Symmetric pairwise correlation of closing prices, unit diagonal.
///
/// Cells for pairs with fewer than two overlapping dates (or a constant
/// side) are NaN and export as empty fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub symbols: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn to_table(&self) -> Table {
        let mut columns = vec!["Stock".to_owned()];
        columns.extend(self.symbols.iter().cloned());
        let mut table = Table::new(columns);
        for (symbol, row) in self.symbols.iter().zip(&self.values) {
            let mut cells = vec![symbol.clone()];
            cells.extend(row.iter().map(|&value| format_metric(value)));
            table.push_row(cells);
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationAnalysis {
    pub matrix: CorrelationMatrix,
    /// Selected symbols with no loaded series.
    pub unknown: Vec<String>,
}

/// Pairwise-complete Pearson correlation over the selected instruments.
///
/// Series align by calendar date; each cell uses only the dates where both
/// sides have an observation. An empty selection is an input-validation
/// state surfaced as [`AnalysisError::EmptySelection`], not a computation.
pub fn analyze(
    series: &[PriceSeries],
    selection: &[Symbol],
) -> Result<CorrelationAnalysis, AnalysisError> {
    if selection.is_empty() {
        return Err(AnalysisError::EmptySelection);
    }

    let mut picked: Vec<&PriceSeries> = Vec::new();
    let mut unknown = Vec::new();
    for symbol in selection {
        if picked.iter().any(|s| s.symbol() == symbol) {
            continue;
        }
        match series.iter().find(|s| s.symbol() == symbol) {
            Some(found) => picked.push(found),
            None => {
                debug!(%symbol, "selected symbol has no loaded series");
                unknown.push(symbol.to_string());
            }
        }
    }

    let by_date: Vec<BTreeMap<Date, f64>> = picked
        .iter()
        .map(|s| s.points().iter().map(|p| (p.date, p.close)).collect())
        .collect();

    let n = picked.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let cell = pairwise_complete(&by_date[i], &by_date[j]);
            values[i][j] = cell;
            values[j][i] = cell;
        }
    }

    Ok(CorrelationAnalysis {
        matrix: CorrelationMatrix {
            symbols: picked.iter().map(|s| s.symbol().to_string()).collect(),
            values,
        },
        unknown,
    })
}

fn pairwise_complete(lhs: &BTreeMap<Date, f64>, rhs: &BTreeMap<Date, f64>) -> f64 {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (date, close) in lhs {
        if let Some(other) = rhs.get(date) {
            x.push(*close);
            y.push(*other);
        }
    }
    pearson(&x, &y).unwrap_or(f64::NAN)
}
