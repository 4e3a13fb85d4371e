//! Configuration management for the AI intensity scanner.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// What to do with downloaded filings once a company has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupMode {
    /// Leave filings on disk
    Manual,
    /// Delete a company's filing folders after processing
    Auto,
}

impl CleanupMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "manual" => Some(Self::Manual),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

/// Configuration for an intensity run.
#[derive(Debug, Clone)]
pub struct Config {
    /// File listing the company symbols to process
    pub companies_file: PathBuf,

    /// Optional keyword file (one phrase per line)
    pub keywords_file: Option<PathBuf>,

    /// Root directory holding downloaded filings
    pub filings_dir: PathBuf,

    /// Filing types to look for (default: 10-K)
    pub filing_types: Vec<String>,

    /// First filing year to include (default: 2020)
    pub start_year: i32,

    /// Last filing year to include (default: 2024)
    pub end_year: i32,

    /// Directory the report is written to (default: ./output)
    pub output_dir: PathBuf,

    /// Report file name (default: AI_Intensity_Report.json)
    pub report_filename: String,

    /// Number of companies processed concurrently; 0 means available parallelism
    pub workers: usize,

    /// Filing cleanup behaviour (default: manual)
    pub cleanup: CleanupMode,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `COMPANIES_FILE`: Path to the company symbol list
    ///
    /// Optional environment variables:
    /// - `KEYWORDS_FILE`: Keyword file (default: built-in vocabulary)
    /// - `FILINGS_DIR`: Filings root (default: ./sec-edgar-filings)
    /// - `FILING_TYPES`: Comma-separated filing types (default: 10-K)
    /// - `START_YEAR` / `END_YEAR`: Year window (default: 2020 / 2024)
    /// - `OUTPUT_DIR`: Report directory (default: ./output)
    /// - `REPORT_FILENAME`: Report file name (default: AI_Intensity_Report.json)
    /// - `WORKERS`: Concurrent companies, 0 for all cores (default: 0)
    /// - `CLEANUP_FILINGS`: `manual` or `auto` (default: manual)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let companies_file = env::var("COMPANIES_FILE")
            .map_err(|_| ConfigError::MissingVar("COMPANIES_FILE".to_string()))?;

        if companies_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "COMPANIES_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let keywords_file = env::var("KEYWORDS_FILE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let defaults = Config::default();

        let filings_dir = env::var("FILINGS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.filings_dir);

        let filing_types = match env::var("FILING_TYPES") {
            Ok(raw) => Self::parse_filing_types(&raw)?,
            Err(_) => defaults.filing_types,
        };

        let start_year = Self::parse_env_i32("START_YEAR", defaults.start_year)?;
        let end_year = Self::parse_env_i32("END_YEAR", defaults.end_year)?;

        if start_year > end_year {
            return Err(ConfigError::InvalidValue {
                var: "START_YEAR".to_string(),
                reason: format!("Must not be after END_YEAR ({} > {})", start_year, end_year),
            });
        }

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let report_filename =
            env::var("REPORT_FILENAME").unwrap_or(defaults.report_filename);

        let workers = Self::parse_env_usize("WORKERS", defaults.workers)?;

        let cleanup = match env::var("CLEANUP_FILINGS") {
            Ok(raw) => CleanupMode::parse(&raw).ok_or_else(|| ConfigError::InvalidValue {
                var: "CLEANUP_FILINGS".to_string(),
                reason: format!("Must be 'manual' or 'auto', got: {}", raw),
            })?,
            Err(_) => defaults.cleanup,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            companies_file: PathBuf::from(companies_file),
            keywords_file,
            filings_dir,
            filing_types,
            start_year,
            end_year,
            output_dir,
            report_filename,
            workers,
            cleanup,
            log_level,
        })
    }

    /// Full path of the report file.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_filename)
    }

    /// Number of companies to process concurrently, resolving 0 to the
    /// machine's available parallelism.
    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            self.workers
        }
    }

    fn parse_filing_types(raw: &str) -> ConfigResult<Vec<String>> {
        let types: Vec<String> = raw
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        if types.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "FILING_TYPES".to_string(),
                reason: "Must list at least one filing type".to_string(),
            });
        }

        Ok(types)
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as i32 with a default value.
    fn parse_env_i32(var_name: &str, default: i32) -> ConfigResult<i32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a year, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            companies_file: PathBuf::from("companies.csv"),
            keywords_file: None,
            filings_dir: PathBuf::from("./sec-edgar-filings"),
            filing_types: vec!["10-K".to_string()],
            start_year: 2020,
            end_year: 2024,
            output_dir: PathBuf::from("./output"),
            report_filename: "AI_Intensity_Report.json".to_string(),
            workers: 0,
            cleanup: CleanupMode::Manual,
            log_level: "info".to_string(),
        }
    }
}
