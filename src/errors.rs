use std::path::PathBuf;
use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Opening or reading a named input/output file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File I/O operations without a known path (stdout, directory creation)
    #[error("I/O error: {0}")]
    IoOther(#[from] std::io::Error),

    /// A qualifying log line held non-numeric text in a numeric field
    #[error("Malformed record at line {line}: {reason} (line content: {content:?})")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// No qualifying records were found, so statistics are undefined
    #[error("Empty input: no qualifying records found")]
    EmptyInput,

    /// Configuration issues and invalid analysis parameters
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/serialisation
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// CSV export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
