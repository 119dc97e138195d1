use time::Date;

use crate::domain::{MonthKey, Symbol};

/// One daily closing-price observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: Date,
    pub close: f64,
}

/// Date-indexed closing-price history for one instrument.
///
/// Dates are strictly increasing after construction. Closes are expected to
/// be positive but that is an upstream data-quality concern and is not
/// enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    symbol: Symbol,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from raw observations.
    ///
    /// Points sort by date; duplicate dates resolve last-wins, so a later
    /// source row overrides an earlier one for the same day.
    pub fn from_points(symbol: Symbol, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|point| point.date);
        points.dedup_by(|next, prev| {
            if next.date == prev.date {
                *prev = *next;
                true
            } else {
                false
            }
        });
        Self { symbol, points }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_close(&self) -> Option<f64> {
        self.points.first().map(|point| point.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|point| point.close)
    }

    /// Period-over-period fractional returns, `r_t = p_t / p_{t-1} - 1`.
    ///
    /// The result has one element fewer than the series; the first
    /// observation has no prior and produces nothing.
    pub fn returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|pair| pair[1].close / pair[0].close - 1.0)
            .collect()
    }

    /// Simple full-period return `(last - first) / first`.
    pub fn full_period_return(&self) -> Option<f64> {
        let first = self.first_close()?;
        let last = self.last_close()?;
        Some((last - first) / first)
    }

    /// Resample to month-end: the last available close within each
    /// calendar month, in month order.
    pub fn month_end_closes(&self) -> Vec<(MonthKey, f64)> {
        let mut resampled: Vec<(MonthKey, f64)> = Vec::new();
        for point in &self.points {
            let key = MonthKey::of(point.date);
            match resampled.last_mut() {
                Some((last_key, close)) if *last_key == key => *close = point.close,
                _ => resampled.push((key, point.close)),
            }
        }
        resampled
    }
}
