use tracing::debug;

use crate::analysis::{sample_std_dev, RankedRow, RankedTable};
use crate::domain::PriceSeries;

/// Trailing window of return observations for the rolling standard
/// deviation.
pub const ROLLING_WINDOW: usize = 30;

/// Annualization assumes ~252 trading periods per year. A fixed policy
/// constant, not configurable per instrument.
pub const TRADING_PERIODS_PER_YEAR: f64 = 252.0;

/// Cross-instrument ranking of annualized rolling volatility.
#[derive(Debug, Clone, PartialEq)]
pub struct VolatilityAnalysis {
    pub ranking: RankedTable,
    /// Instruments with too little history for one full window. Excluded
    /// from the ranking, never coerced to zero.
    pub skipped: Vec<String>,
}

/// Per instrument: rolling standard deviation of simple returns over the
/// last [`ROLLING_WINDOW`] observations, annualized by sqrt(252). The
/// metric is the value at the most recent position.
pub fn analyze(series: &[PriceSeries]) -> VolatilityAnalysis {
    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for instrument in series {
        match latest_annualized_volatility(instrument) {
            Some(value) => rows.push(RankedRow {
                label: instrument.symbol().to_string(),
                value,
            }),
            None => {
                debug!(
                    symbol = %instrument.symbol(),
                    observations = instrument.len(),
                    "insufficient history for rolling volatility"
                );
                skipped.push(instrument.symbol().to_string());
            }
        }
    }

    VolatilityAnalysis {
        ranking: RankedTable::from_unsorted("Stock", "Volatility", rows),
        skipped,
    }
}

/// Undefined (`None`) until the series has produced at least one full
/// window of returns, i.e. `ROLLING_WINDOW + 1` closes.
pub fn latest_annualized_volatility(series: &PriceSeries) -> Option<f64> {
    let returns = series.returns();
    if returns.len() < ROLLING_WINDOW {
        return None;
    }
    let window = &returns[returns.len() - ROLLING_WINDOW..];
    sample_std_dev(window).map(|std| std * TRADING_PERIODS_PER_YEAR.sqrt())
}
