use std::collections::BTreeMap;

use tracing::debug;

use crate::analysis::{mean, RankedRow, RankedTable};
use crate::domain::PriceSeries;
use crate::sectors::SectorMap;

/// Sector-level ranking of average full-period returns.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorAnalysis {
    pub ranking: RankedTable,
    /// Instruments with no matching sector reference row.
    pub unmatched: Vec<String>,
    /// Instruments with no observations, for which no return exists.
    pub skipped: Vec<String>,
}

/// Per instrument: simple full-period return `(last - first) / first`.
/// Instruments join to sectors through the map's configured strategy;
/// each sector's metric is the equal-weighted mean of its constituents.
pub fn analyze(series: &[PriceSeries], sectors: &SectorMap) -> SectorAnalysis {
    let mut by_sector: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    let mut unmatched = Vec::new();
    let mut skipped = Vec::new();

    for instrument in series {
        let Some(sector) = sectors.resolve(instrument.symbol()) else {
            debug!(symbol = %instrument.symbol(), "no sector reference match");
            unmatched.push(instrument.symbol().to_string());
            continue;
        };

        let Some(full_period) = instrument.full_period_return() else {
            debug!(symbol = %instrument.symbol(), "empty series in sector aggregation");
            skipped.push(instrument.symbol().to_string());
            continue;
        };

        by_sector.entry(sector.to_owned()).or_default().push(full_period);
    }

    let rows = by_sector
        .into_iter()
        .map(|(sector, returns)| RankedRow {
            label: sector,
            value: mean(&returns),
        })
        .collect();

    SectorAnalysis {
        ranking: RankedTable::from_unsorted("Sector", "Yearly_Return", rows),
        unmatched,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::{PricePoint, Symbol};
    use crate::sectors::JoinStrategy;

    fn series(symbol: &str, closes: &[f64]) -> PriceSeries {
        let start = date!(2024 - 01 - 01);
        let points = closes
            .iter()
            .enumerate()
            .map(|(offset, &close)| PricePoint {
                date: start
                    .checked_add(time::Duration::days(offset as i64))
                    .expect("date in range"),
                close,
            })
            .collect();
        PriceSeries::from_points(Symbol::parse(symbol).expect("symbol"), points)
    }

    fn sectors() -> SectorMap {
        SectorMap::new(
            vec![
                ("INFY".to_owned(), "IT".to_owned()),
                ("TCS".to_owned(), "IT".to_owned()),
                ("HDFCBANK".to_owned(), "Banking".to_owned()),
            ],
            JoinStrategy::ExactSymbol,
        )
        .expect("valid map")
    }

    #[test]
    fn averages_constituents_equal_weighted() {
        let instruments = vec![
            series("INFY", &[100.0, 120.0]),  // +0.20
            series("TCS", &[100.0, 110.0]),   // +0.10
            series("HDFCBANK", &[100.0, 105.0]), // +0.05
        ];
        let analysis = analyze(&instruments, &sectors());

        assert_eq!(analysis.ranking.rows[0].label, "IT");
        assert!((analysis.ranking.rows[0].value - 0.15).abs() < 1e-12);
        assert!((analysis.ranking.rows[1].value - 0.05).abs() < 1e-12);
    }

    #[test]
    fn unmatched_instruments_are_excluded_with_diagnostic() {
        let instruments = vec![
            series("INFY", &[100.0, 110.0]),
            series("UNKNOWN", &[100.0, 200.0]),
        ];
        let analysis = analyze(&instruments, &sectors());

        assert_eq!(analysis.ranking.len(), 1);
        assert_eq!(analysis.unmatched, vec!["UNKNOWN".to_owned()]);
    }

    #[test]
    fn single_instrument_sector_reports_its_own_value() {
        let instruments = vec![series("HDFCBANK", &[100.0, 150.0])];
        let analysis = analyze(&instruments, &sectors());

        assert_eq!(analysis.ranking.len(), 1);
        assert!((analysis.ranking.rows[0].value - 0.5).abs() < 1e-12);
    }
}
