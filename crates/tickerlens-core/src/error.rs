use thiserror::Error;

/// Validation errors for domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid calendar date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("prefix join length must be at least 1")]
    ZeroPrefixLength,
}

/// Errors raised while loading a single instrument's source file.
///
/// A `LoadError` is terminal for that one instrument; batch loading logs
/// it and continues with the remaining files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file '{file}' is missing required column '{field}'")]
    MissingField { file: String, field: &'static str },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("csv error in '{file}': {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised by analysis entry points.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no instruments selected; select at least one symbol")]
    EmptySelection,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised while persisting an exported table.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error writing '{file}': {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
