//! Error types for the AI intensity scanner.
//!
//! The scanning core (normalizer, keyword index, scanner) is infallible. These
//! error types cover the outer layers: configuration, company lists, filing
//! discovery and report output. They are defined with `thiserror` so callers
//! can match on precise variants.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while loading the list of companies to process.
#[derive(Error, Debug)]
pub enum CompanyListError {
    /// The companies file could not be read
    #[error("Failed to read companies file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while discovering or reading filings.
#[derive(Error, Debug)]
pub enum FilingError {
    /// Filesystem operation failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Blocking task could not be joined
    #[error("Task join error: {0}")]
    TaskJoin(String),

    /// Generic filing error with context
    #[error("Filing error: {0}")]
    Other(String),
}

/// Errors that can occur while writing the report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Filesystem operation failed
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the report
    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CompanyListError
pub type CompanyListResult<T> = Result<T, CompanyListError>;

/// Convenience type alias for Results with FilingError
pub type FilingResult<T> = Result<T, FilingError>;

/// Convenience type alias for Results with ReportError
pub type ReportResult<T> = Result<T, ReportError>;
