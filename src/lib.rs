//! AI Intensity - keyword intensity scoring for SEC filings.
//!
//! This library measures how often a company's filings mention a vocabulary
//! of AI-related phrases. Text is normalized into ASCII tokens and scanned once
//! for non-overlapping, longest-first phrase matches.
//!
//! # Architecture
//!
//! - **intensity**: normalizer, keyword index and scanner
//! - **domain**: company symbols and EDGAR ticker translation
//! - **filings**: section and year extraction for full-submission files
//! - **repositories**: discovery and reading of downloaded filings
//! - **services**: the per-company scoring workflow
//! - **report**: summary, detailed and trend tables
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling
//! - **metrics**: run counters and timings

pub mod config;
pub mod domain;
pub mod error;
pub mod filings;
pub mod intensity;
pub mod metrics;
pub mod models;
pub mod report;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::{CleanupMode, Config};
pub use domain::{Company, EdgarTicker};
pub use error::{CompanyListError, ConfigError, FilingError, ReportError};
pub use intensity::{
    load_keywords, scan, IntensityEngine, KeywordIndex, Normalizer, ScanResult, Token,
};
pub use metrics::{ScanMetrics, ScanMetricsSummary, ScanTimer};
pub use models::{FilingRecord, Submission};
pub use report::IntensityReport;
pub use repositories::{FilingRepository, LocalFilingRepository};
pub use services::{IntensityWorkflow, WorkflowOptions};
