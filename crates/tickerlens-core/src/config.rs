use std::path::PathBuf;

/// Explicit configuration handed to each component at construction.
///
/// There is deliberately no ambient or process-global state: every loader,
/// aggregator and exporter receives the paths it needs as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Directory holding one CSV file per instrument.
    pub data_dir: PathBuf,
    /// Sector reference table, required only by the sector aggregator.
    pub sector_file: Option<PathBuf>,
    /// Directory receiving exported tables.
    pub output_dir: PathBuf,
}

impl AnalysisConfig {
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            sector_file: None,
            output_dir: output_dir.into(),
        }
    }

    pub fn with_sector_file(mut self, sector_file: impl Into<PathBuf>) -> Self {
        self.sector_file = Some(sector_file.into());
        self
    }
}
