use tracing::debug;

use crate::analysis::{RankedRow, RankedTable};
use crate::domain::PriceSeries;

/// Cross-instrument ranking of total compounded return.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeReturnAnalysis {
    pub ranking: RankedTable,
    /// Instruments with fewer than two closes, for which no return exists.
    pub skipped: Vec<String>,
}

/// Per instrument: the compounding product over the full history,
/// `prod(1 + r_t) - 1`; the metric is the value at the last position.
pub fn analyze(series: &[PriceSeries]) -> CumulativeReturnAnalysis {
    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for instrument in series {
        match total_compounded_return(instrument) {
            Some(value) => rows.push(RankedRow {
                label: instrument.symbol().to_string(),
                value,
            }),
            None => {
                debug!(
                    symbol = %instrument.symbol(),
                    observations = instrument.len(),
                    "no return observations for cumulative analysis"
                );
                skipped.push(instrument.symbol().to_string());
            }
        }
    }

    CumulativeReturnAnalysis {
        ranking: RankedTable::from_unsorted("Stock", "Cumulative", rows),
        skipped,
    }
}

/// Running compounded-return path over a return series. Position 0 equals
/// the single-period return `r_1`.
pub fn compounded_path(returns: &[f64]) -> Vec<f64> {
    let mut product = 1.0;
    returns
        .iter()
        .map(|r| {
            product *= 1.0 + r;
            product - 1.0
        })
        .collect()
}

pub fn total_compounded_return(series: &PriceSeries) -> Option<f64> {
    let returns = series.returns();
    compounded_path(&returns).last().copied()
}
