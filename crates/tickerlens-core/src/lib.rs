//! Core contracts for tickerlens.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The CSV series loader and its per-row diagnostics
//! - The five analysis operations (volatility, cumulative return,
//!   sector aggregation, correlation, monthly gainers/losers)
//! - Export and presentation seams

pub mod analysis;
pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod loader;
pub mod sectors;

pub use analysis::{
    CorrelationAnalysis, CorrelationMatrix, CumulativeReturnAnalysis, MonthlyAnalysis,
    MonthlyMovers, RankedRow, RankedTable, SectorAnalysis, VolatilityAnalysis,
};
pub use chart::{ChartKind, ChartSpec, Presenter};
pub use config::AnalysisConfig;
pub use domain::{parse_trading_date, MonthKey, PricePoint, PriceSeries, Symbol};
pub use error::{AnalysisError, ExportError, LoadError, ValidationError};
pub use export::{CsvExporter, Exporter, Table};
pub use loader::{CsvLoader, LoadReport, LoadedBatch};
pub use sectors::{JoinStrategy, SectorMap};
