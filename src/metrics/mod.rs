//! Basic metrics instrumentation for a scan run.
//!
//! Provides counters and duration tracking for companies, filings and the
//! scoring step.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the workflow's concurrent tasks.
#[derive(Debug, Clone)]
pub struct ScanMetrics {
    /// Companies whose filings were processed without error
    companies_processed: Arc<AtomicU64>,

    /// Companies whose processing failed
    companies_failed: Arc<AtomicU64>,

    /// Companies with no submission on disk
    companies_without_filings: Arc<AtomicU64>,

    /// Filings scored
    filings_scanned: Arc<AtomicU64>,

    /// Filings dropped because their year fell outside the window
    filings_skipped: Arc<AtomicU64>,

    /// Tokens produced by normalization
    tokens_scanned: Arc<AtomicU64>,

    /// Keyword matches counted
    matches_total: Arc<AtomicU64>,

    /// Total scoring time in milliseconds
    scan_duration_total_ms: Arc<AtomicU64>,

    /// Bytes removed by filing cleanup
    bytes_freed: Arc<AtomicU64>,
}

impl Default for ScanMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            companies_processed: Arc::new(AtomicU64::new(0)),
            companies_failed: Arc::new(AtomicU64::new(0)),
            companies_without_filings: Arc::new(AtomicU64::new(0)),
            filings_scanned: Arc::new(AtomicU64::new(0)),
            filings_skipped: Arc::new(AtomicU64::new(0)),
            tokens_scanned: Arc::new(AtomicU64::new(0)),
            matches_total: Arc::new(AtomicU64::new(0)),
            scan_duration_total_ms: Arc::new(AtomicU64::new(0)),
            bytes_freed: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_company_processed(&self) {
        self.companies_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_company_failed(&self) {
        self.companies_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_company_without_filings(&self) {
        self.companies_without_filings
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record one scored filing.
    pub fn record_filing_scanned(&self, tokens: usize, matches: u32, duration: Duration) {
        self.filings_scanned.fetch_add(1, Ordering::Relaxed);
        self.tokens_scanned
            .fetch_add(tokens as u64, Ordering::Relaxed);
        self.matches_total
            .fetch_add(u64::from(matches), Ordering::Relaxed);
        self.scan_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_filing_skipped(&self) {
        self.filings_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_bytes_freed(&self, bytes: u64) {
        self.bytes_freed.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn companies_processed(&self) -> u64 {
        self.companies_processed.load(Ordering::Relaxed)
    }

    pub fn companies_failed(&self) -> u64 {
        self.companies_failed.load(Ordering::Relaxed)
    }

    pub fn companies_without_filings(&self) -> u64 {
        self.companies_without_filings.load(Ordering::Relaxed)
    }

    pub fn filings_scanned(&self) -> u64 {
        self.filings_scanned.load(Ordering::Relaxed)
    }

    pub fn filings_skipped(&self) -> u64 {
        self.filings_skipped.load(Ordering::Relaxed)
    }

    pub fn tokens_scanned(&self) -> u64 {
        self.tokens_scanned.load(Ordering::Relaxed)
    }

    pub fn matches_total(&self) -> u64 {
        self.matches_total.load(Ordering::Relaxed)
    }

    pub fn scan_duration_total_ms(&self) -> u64 {
        self.scan_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average scoring time per filing in milliseconds.
    pub fn scan_duration_avg_ms(&self) -> f64 {
        let total = self.scan_duration_total_ms.load(Ordering::Relaxed);
        let count = self.filings_scanned.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn bytes_freed(&self) -> u64 {
        self.bytes_freed.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.companies_processed.store(0, Ordering::Relaxed);
        self.companies_failed.store(0, Ordering::Relaxed);
        self.companies_without_filings.store(0, Ordering::Relaxed);
        self.filings_scanned.store(0, Ordering::Relaxed);
        self.filings_skipped.store(0, Ordering::Relaxed);
        self.tokens_scanned.store(0, Ordering::Relaxed);
        self.matches_total.store(0, Ordering::Relaxed);
        self.scan_duration_total_ms.store(0, Ordering::Relaxed);
        self.bytes_freed.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> ScanMetricsSummary {
        ScanMetricsSummary {
            companies_processed: self.companies_processed(),
            companies_failed: self.companies_failed(),
            companies_without_filings: self.companies_without_filings(),
            filings_scanned: self.filings_scanned(),
            filings_skipped: self.filings_skipped(),
            tokens_scanned: self.tokens_scanned(),
            matches_total: self.matches_total(),
            scan_duration_total_ms: self.scan_duration_total_ms(),
            scan_duration_avg_ms: self.scan_duration_avg_ms(),
            bytes_freed: self.bytes_freed(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct ScanMetricsSummary {
    pub companies_processed: u64,
    pub companies_failed: u64,
    pub companies_without_filings: u64,
    pub filings_scanned: u64,
    pub filings_skipped: u64,
    pub tokens_scanned: u64,
    pub matches_total: u64,
    pub scan_duration_total_ms: u64,
    pub scan_duration_avg_ms: f64,
    pub bytes_freed: u64,
}

/// Helper for timing the scoring of one filing.
pub struct ScanTimer {
    start: Instant,
    metrics: ScanMetrics,
}

impl ScanTimer {
    /// Start timing a scan.
    pub fn new(metrics: ScanMetrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the scanned filing.
    pub fn complete(self, tokens: usize, matches: u32) {
        let duration = self.start.elapsed();
        self.metrics.record_filing_scanned(tokens, matches, duration);
    }
}
