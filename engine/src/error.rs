use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV writing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    // Header problems: the whole input is rejected.
    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    // A single row that could not be turned into a record; the row is skipped.
    #[error("Malformed row at data line {line}: {reason}")]
    RowStructureError { line: usize, reason: String },

    #[error("Aggregation error: {0}")]
    AggregationError(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl EngineError {
    /// True for errors that reject the whole input rather than a single row.
    pub fn is_format_error(&self) -> bool {
        matches!(self, EngineError::CsvDataFormatError(_))
    }
}
