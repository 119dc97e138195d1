use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use crate::analysis::{format_metric, RankedRow};
use crate::domain::{MonthKey, PriceSeries};
use crate::export::Table;

/// Instruments reported on each side of a month's ranking.
pub const DEFAULT_MOVERS_PER_SIDE: usize = 5;

/// Top gainers and losers for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyMovers {
    pub month: MonthKey,
    /// Largest month-over-month percentage returns, descending.
    pub gainers: Vec<RankedRow>,
    /// Smallest month-over-month percentage returns, ascending.
    pub losers: Vec<RankedRow>,
}

impl MonthlyMovers {
    /// Export name, e.g. `2024_01_gainers_losers`.
    pub fn export_name(&self) -> String {
        format!("{}_gainers_losers", self.month.export_label())
    }

    /// Side-by-side table pairing the i-th gainer with the i-th loser.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(["Gainer", "Gainer_Return", "Loser", "Loser_Return"]);
        let rows = self.gainers.len().max(self.losers.len());
        for index in 0..rows {
            let gainer = self.gainers.get(index);
            let loser = self.losers.get(index);
            table.push_row([
                gainer.map(|row| row.label.clone()).unwrap_or_default(),
                gainer
                    .map(|row| format_metric(row.value))
                    .unwrap_or_default(),
                loser.map(|row| row.label.clone()).unwrap_or_default(),
                loser
                    .map(|row| format_metric(row.value))
                    .unwrap_or_default(),
            ]);
        }
        table
    }
}

/// Month-by-month gainers/losers over the unioned calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAnalysis {
    pub months: Vec<MonthlyMovers>,
    /// Instruments with fewer than two month-end observations.
    pub skipped: Vec<String>,
}

/// Resample each series to month-end closes and rank month-over-month
/// percentage returns, `(this - prior) / prior * 100`.
///
/// The first month of each series has no prior month-end and is excluded
/// from that instrument's returns. Months with fewer than
/// `movers_per_side` instruments produce shorter lists.
pub fn analyze(series: &[PriceSeries], movers_per_side: usize) -> MonthlyAnalysis {
    let mut calendar: BTreeMap<MonthKey, Vec<RankedRow>> = BTreeMap::new();
    let mut skipped = Vec::new();

    for instrument in series {
        let monthly = instrument.month_end_closes();
        if monthly.len() < 2 {
            debug!(
                symbol = %instrument.symbol(),
                month_ends = monthly.len(),
                "not enough month-end observations"
            );
            skipped.push(instrument.symbol().to_string());
            continue;
        }

        for pair in monthly.windows(2) {
            let (_, prior) = pair[0];
            let (month, close) = pair[1];
            calendar.entry(month).or_default().push(RankedRow {
                label: instrument.symbol().to_string(),
                value: (close - prior) / prior * 100.0,
            });
        }
    }

    let months = calendar
        .into_iter()
        .map(|(month, mut rows)| {
            rows.sort_by(|a, b| {
                b.value
                    .partial_cmp(&a.value)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.label.cmp(&b.label))
            });
            let gainers = rows.iter().take(movers_per_side).cloned().collect();
            let mut losers: Vec<RankedRow> = rows
                .iter()
                .rev()
                .take(movers_per_side)
                .cloned()
                .collect();
            // rev() yields ascending by value but reverses the label
            // tie-break; restore it
            losers.sort_by(|a, b| {
                a.value
                    .partial_cmp(&b.value)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.label.cmp(&b.label))
            });
            MonthlyMovers {
                month,
                gainers,
                losers,
            }
        })
        .collect();

    MonthlyAnalysis { months, skipped }
}

#[cfg(test)]
mod tests {
    use time::macros::date;
    use time::Date;

    use super::*;
    use crate::domain::{PricePoint, Symbol};

    fn series(symbol: &str, points: &[(Date, f64)]) -> PriceSeries {
        let points = points
            .iter()
            .map(|&(date, close)| PricePoint { date, close })
            .collect();
        PriceSeries::from_points(Symbol::parse(symbol).expect("symbol"), points)
    }

    #[test]
    fn two_month_ends_yield_one_ranked_month() {
        let instrument = series(
            "A",
            &[
                (date!(2024 - 01 - 15), 90.0),
                (date!(2024 - 01 - 31), 100.0),
                (date!(2024 - 02 - 28), 110.0),
            ],
        );
        let analysis = analyze(&[instrument], DEFAULT_MOVERS_PER_SIDE);

        assert_eq!(analysis.months.len(), 1);
        let month = &analysis.months[0];
        assert_eq!(month.month, MonthKey { year: 2024, month: 2 });
        assert_eq!(month.gainers.len(), 1);
        assert!((month.gainers[0].value - 10.0).abs() < 1e-12);
    }

    #[test]
    fn fewer_instruments_than_requested_yield_shorter_lists() {
        let a = series(
            "A",
            &[(date!(2024 - 01 - 31), 100.0), (date!(2024 - 02 - 29), 120.0)],
        );
        let b = series(
            "B",
            &[(date!(2024 - 01 - 31), 100.0), (date!(2024 - 02 - 29), 80.0)],
        );
        let analysis = analyze(&[a, b], 5);

        let month = &analysis.months[0];
        assert_eq!(month.gainers.len(), 2);
        assert_eq!(month.losers.len(), 2);
        assert_eq!(month.gainers[0].label, "A");
        assert_eq!(month.losers[0].label, "B");
    }

    #[test]
    fn single_month_series_is_skipped() {
        let instrument = series("A", &[(date!(2024 - 01 - 31), 100.0)]);
        let analysis = analyze(&[instrument], 5);

        assert!(analysis.months.is_empty());
        assert_eq!(analysis.skipped, vec!["A".to_owned()]);
    }

    #[test]
    fn export_name_uses_year_month_label() {
        let movers = MonthlyMovers {
            month: MonthKey { year: 2024, month: 3 },
            gainers: Vec::new(),
            losers: Vec::new(),
        };
        assert_eq!(movers.export_name(), "2024_03_gainers_losers");
    }
}
