use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{parse_trading_date, PricePoint, PriceSeries, Symbol};
use crate::error::LoadError;

/// Per-file row diagnostics produced by permissive parsing.
///
/// Rows with an unparseable date or close are dropped from the series but
/// counted here, so lost rows are visible instead of silently missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub file: String,
    pub rows_total: usize,
    pub rows_invalid_date: usize,
    pub rows_invalid_close: usize,
}

impl LoadReport {
    pub fn rows_kept(&self) -> usize {
        self.rows_total - self.rows_invalid_date - self.rows_invalid_close
    }

    pub fn has_invalid_rows(&self) -> bool {
        self.rows_invalid_date > 0 || self.rows_invalid_close > 0
    }
}

/// Outcome of loading every instrument file under a directory.
#[derive(Debug, Default)]
pub struct LoadedBatch {
    pub series: Vec<PriceSeries>,
    pub reports: Vec<LoadReport>,
    /// Human-readable reasons for files that failed to load at all.
    pub skipped: Vec<String>,
}

/// Reads per-instrument price series from a directory of CSV files.
///
/// Each file must expose a date column and a close column (matched
/// case-insensitively). A file missing either aborts loading that one
/// instrument; the batch continues.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    data_dir: PathBuf,
}

impl CsvLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load one instrument file. The symbol is the file stem, uppercased.
    pub fn load_file(&self, path: &Path) -> Result<(PriceSeries, LoadReport), LoadError> {
        let file_name = display_name(path);
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        let symbol = Symbol::parse(stem)?;

        // flexible: a ragged row should count as invalid, not abort the file
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| LoadError::Csv {
                file: file_name.clone(),
                source,
            })?;

        let headers = reader.headers().map_err(|source| LoadError::Csv {
            file: file_name.clone(),
            source,
        })?;
        let date_index = column_index(headers, "date").ok_or(LoadError::MissingField {
            file: file_name.clone(),
            field: "date",
        })?;
        let close_index = column_index(headers, "close").ok_or(LoadError::MissingField {
            file: file_name.clone(),
            field: "close",
        })?;

        let mut report = LoadReport {
            file: file_name.clone(),
            ..LoadReport::default()
        };
        let mut points = Vec::new();

        for record in reader.records() {
            let record = record.map_err(|source| LoadError::Csv {
                file: file_name.clone(),
                source,
            })?;
            report.rows_total += 1;

            let raw_date = record.get(date_index).unwrap_or_default();
            let date = match parse_trading_date(raw_date) {
                Ok(date) => date,
                Err(_) => {
                    report.rows_invalid_date += 1;
                    debug!(file = %file_name, value = raw_date, "dropping row with unparseable date");
                    continue;
                }
            };

            let raw_close = record.get(close_index).unwrap_or_default();
            let close = match raw_close.trim().parse::<f64>() {
                Ok(close) if close.is_finite() => close,
                _ => {
                    report.rows_invalid_close += 1;
                    debug!(file = %file_name, value = raw_close, "dropping row with unparseable close");
                    continue;
                }
            };

            points.push(PricePoint { date, close });
        }

        if report.has_invalid_rows() {
            warn!(
                file = %file_name,
                invalid_dates = report.rows_invalid_date,
                invalid_closes = report.rows_invalid_close,
                "dropped rows during load"
            );
        }

        Ok((PriceSeries::from_points(symbol, points), report))
    }

    /// Load every `*.csv` under the data directory, in file-name order.
    ///
    /// Files that fail to load are recorded in `skipped` with a diagnostic
    /// and do not abort the batch.
    pub fn load_dir(&self) -> Result<LoadedBatch, LoadError> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.data_dir)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
            })
            .collect();
        paths.sort();

        let mut batch = LoadedBatch::default();
        for path in paths {
            match self.load_file(&path) {
                Ok((series, report)) => {
                    batch.series.push(series);
                    batch.reports.push(report);
                }
                Err(error) => {
                    warn!(file = %display_name(&path), %error, "skipping instrument file");
                    batch
                        .skipped
                        .push(format!("{}: {error}", display_name(&path)));
                }
            }
        }

        Ok(batch)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("<unnamed>")
        .to_owned()
}
