//! Report tables built from scored filings.
//!
//! The report holds three views of the same records:
//!
//! - **summary**: one row per ticker with summed scores and keyword counts
//! - **detailed**: every filing, sorted by ticker and year
//! - **trend**: a ticker by year pivot of the score
//!
//! Keyword columns are zero-filled over every phrase that matched anywhere in
//! the run, so all rows of a table share the same columns.

use crate::error::ReportResult;
use crate::models::FilingRecord;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Per-ticker totals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryRow {
    #[serde(rename = "Ticker")]
    pub ticker: String,

    #[serde(rename = "EDGAR_Ticker")]
    pub edgar_ticker: String,

    #[serde(rename = "AI_Intensity_Score_Total")]
    pub score_total: u64,

    #[serde(rename = "Filing_Count")]
    pub filing_count: u64,

    #[serde(flatten)]
    pub keyword_totals: BTreeMap<String, u64>,
}

/// One ticker's scores by year.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrendRow {
    #[serde(rename = "Ticker")]
    pub ticker: String,

    #[serde(flatten)]
    pub scores: BTreeMap<i32, u64>,
}

/// Ticker by year pivot of summed scores.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TrendTable {
    /// Column years, ascending
    pub years: Vec<i32>,

    /// Rows, tickers ascending
    pub rows: Vec<TrendRow>,
}

/// The full report.
#[derive(Debug, Clone, Serialize)]
pub struct IntensityReport {
    pub generated_at: DateTime<Utc>,
    pub filing_count: usize,
    pub summary: Vec<SummaryRow>,
    pub detailed: Vec<FilingRecord>,
    pub trend: TrendTable,
}

impl IntensityReport {
    pub fn build(records: &[FilingRecord]) -> Self {
        let columns: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.keyword_counts.keys().map(String::as_str))
            .collect();

        Self {
            generated_at: Utc::now(),
            filing_count: records.len(),
            summary: build_summary(records, &columns),
            detailed: build_detailed(records, &columns),
            trend: build_trend(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filing_count == 0
    }

    /// Write the report as pretty JSON, creating parent directories.
    ///
    /// When `path` cannot be written for lack of permission (e.g. the file is
    /// locked by another program) the report goes to a timestamped sibling
    /// instead. Returns the path actually written.
    pub fn write_report(&self, path: &Path) -> ReportResult<PathBuf> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(self)?;

        match std::fs::write(path, &json) {
            Ok(()) => Ok(path.to_path_buf()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                let fallback = timestamped_path(path, Local::now());
                warn!(
                    "Output file '{}' is locked. Saving to '{}' instead.",
                    path.display(),
                    fallback.display()
                );
                std::fs::write(&fallback, &json)?;
                Ok(fallback)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// `<stem>_<YYYYmmdd_HHMMSS>.<ext>` next to `path`.
pub fn timestamped_path(path: &Path, now: DateTime<Local>) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let stamp = now.format("%Y%m%d_%H%M%S");

    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, stamp),
    };
    path.with_file_name(name)
}

fn zero_filled<T>(
    columns: &BTreeSet<&str>,
    values: impl Fn(&str) -> T,
) -> BTreeMap<String, T> {
    columns
        .iter()
        .map(|col| (col.to_string(), values(*col)))
        .collect()
}

fn build_summary(records: &[FilingRecord], columns: &BTreeSet<&str>) -> Vec<SummaryRow> {
    let mut by_ticker: BTreeMap<&str, SummaryRow> = BTreeMap::new();

    for record in records {
        let row = by_ticker
            .entry(record.ticker.as_str())
            .or_insert_with(|| SummaryRow {
                ticker: record.ticker.clone(),
                edgar_ticker: record.edgar_ticker.clone(),
                score_total: 0,
                filing_count: 0,
                keyword_totals: zero_filled(columns, |_| 0),
            });

        row.score_total += u64::from(record.score);
        row.filing_count += 1;
        for (phrase, count) in &record.keyword_counts {
            if let Some(total) = row.keyword_totals.get_mut(phrase) {
                *total += u64::from(*count);
            }
        }
    }

    let mut rows: Vec<SummaryRow> = by_ticker.into_values().collect();
    rows.sort_by(|a, b| {
        b.score_total
            .cmp(&a.score_total)
            .then_with(|| a.ticker.cmp(&b.ticker))
    });
    rows
}

fn build_detailed(records: &[FilingRecord], columns: &BTreeSet<&str>) -> Vec<FilingRecord> {
    let mut rows: Vec<FilingRecord> = records
        .iter()
        .map(|record| FilingRecord {
            keyword_counts: zero_filled(columns, |col| record.keyword_count(col)),
            ..record.clone()
        })
        .collect();

    rows.sort_by(|a, b| a.ticker.cmp(&b.ticker).then(a.year.cmp(&b.year)));
    rows
}

fn build_trend(records: &[FilingRecord]) -> TrendTable {
    let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();
    let mut by_ticker: BTreeMap<&str, BTreeMap<i32, u64>> = BTreeMap::new();

    for record in records {
        let scores = by_ticker
            .entry(record.ticker.as_str())
            .or_insert_with(|| years.iter().map(|&y| (y, 0)).collect());
        *scores.entry(record.year).or_insert(0) += u64::from(record.score);
    }

    TrendTable {
        years: years.into_iter().collect(),
        rows: by_ticker
            .into_iter()
            .map(|(ticker, scores)| TrendRow {
                ticker: ticker.to_string(),
                scores,
            })
            .collect(),
    }
}
