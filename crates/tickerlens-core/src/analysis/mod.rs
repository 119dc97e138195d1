//! The five analysis operations and their shared ranking/statistics
//! primitives.
//!
//! Every operation recomputes from scratch on each call, holds its inputs
//! in memory and never mutates shared state; per-instrument problems
//! surface as skipped/warning entries, never as batch failures.

pub mod correlation;
pub mod cumulative;
pub mod monthly;
pub mod sector;
pub mod volatility;

use std::cmp::Ordering;

use serde::Serialize;

use crate::export::Table;

pub use correlation::{CorrelationAnalysis, CorrelationMatrix};
pub use cumulative::CumulativeReturnAnalysis;
pub use monthly::{MonthlyAnalysis, MonthlyMovers, DEFAULT_MOVERS_PER_SIDE};
pub use sector::SectorAnalysis;
pub use volatility::{VolatilityAnalysis, ROLLING_WINDOW, TRADING_PERIODS_PER_YEAR};

/// One labelled metric value in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub label: String,
    pub value: f64,
}

/// Rows ordered descending by metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTable {
    pub label_column: String,
    pub value_column: String,
    pub rows: Vec<RankedRow>,
}

impl RankedTable {
    /// Sort rows descending by value. Ties order ascending by label so the
    /// result never depends on source-file enumeration order.
    pub fn from_unsorted(
        label_column: impl Into<String>,
        value_column: impl Into<String>,
        mut rows: Vec<RankedRow>,
    ) -> Self {
        rows.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.label.cmp(&b.label))
        });
        Self {
            label_column: label_column.into(),
            value_column: value_column.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `count` rows, with `count` clamped to `[1, len]`.
    pub fn top(&self, count: usize) -> Self {
        let clamped = if self.rows.is_empty() {
            0
        } else {
            count.clamp(1, self.rows.len())
        };
        Self {
            label_column: self.label_column.clone(),
            value_column: self.value_column.clone(),
            rows: self.rows[..clamped].to_vec(),
        }
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new([self.label_column.clone(), self.value_column.clone()]);
        for row in &self.rows {
            table.push_row([row.label.clone(), format_metric(row.value)]);
        }
        table
    }
}

/// Format a metric cell; non-finite values export as an empty field.
pub(crate) fn format_metric(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.6}")
    } else {
        String::new()
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator), the usual rolling-window
/// estimator. Fewer than 2 observations is undefined.
pub(crate) fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Pearson correlation coefficient. None when either side has fewer than
/// 2 observations or zero variance.
pub(crate) fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let numerator: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();
    let denom_x: f64 = x.iter().map(|xi| (xi - mean_x).powi(2)).sum();
    let denom_y: f64 = y.iter().map(|yi| (yi - mean_y).powi(2)).sum();
    let denominator = (denom_x * denom_y).sqrt();
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}
