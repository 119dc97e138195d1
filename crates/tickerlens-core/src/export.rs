use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExportError;

/// Generic tabular form consumed by the export and presentation seams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Persists a table under a destination name. Repeated export with the
/// same name overwrites (idempotent by name).
pub trait Exporter {
    fn export(&self, name: &str, table: &Table) -> Result<PathBuf, ExportError>;
}

/// Writes each table to `{output_dir}/{name}.csv`.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Exporter for CsvExporter {
    fn export(&self, name: &str, table: &Table) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{name}.csv"));

        let mut writer = csv::Writer::from_path(&path).map_err(|source| ExportError::Csv {
            file: path.display().to_string(),
            source,
        })?;
        let write_error = |source| ExportError::Csv {
            file: path.display().to_string(),
            source,
        };
        writer.write_record(&table.columns).map_err(write_error)?;
        for row in &table.rows {
            writer.write_record(row).map_err(write_error)?;
        }
        writer.flush()?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_overwrites_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let exporter = CsvExporter::new(dir.path().join("results"));

        let mut table = Table::new(["Stock", "Metric"]);
        table.push_row(["A", "1.0"]);
        let path = exporter.export("ranking", &table).expect("must export");
        assert!(path.ends_with("ranking.csv"));

        let mut replacement = Table::new(["Stock", "Metric"]);
        replacement.push_row(["B", "2.0"]);
        exporter
            .export("ranking", &replacement)
            .expect("must overwrite");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert!(contents.contains("B"));
        assert!(!contents.contains("A,1.0"));
    }
}
