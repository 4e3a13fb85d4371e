//! Intensity workflow.
//!
//! Drives the per-company pipeline: discover submissions, read them, keep
//! their textual sections, score them and attach a filing year. Companies are
//! processed concurrently up to a configured limit and scoring runs on the
//! blocking pool.

use crate::config::{CleanupMode, Config};
use crate::domain::Company;
use crate::error::{FilingError, FilingResult};
use crate::filings::{extract_text_content, filing_year};
use crate::intensity::{DocumentScore, IntensityEngine};
use crate::metrics::{ScanMetrics, ScanTimer};
use crate::models::{FilingRecord, Submission};
use crate::repositories::FilingRepository;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Knobs for one workflow run.
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// Filing types to look up for each company
    pub filing_types: Vec<String>,

    /// First filing year kept
    pub start_year: i32,

    /// Last filing year kept
    pub end_year: i32,

    /// Companies processed concurrently, at least 1
    pub workers: usize,

    /// Whether to delete a company's filings after scoring
    pub cleanup: CleanupMode,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            filing_types: vec!["10-K".to_string()],
            start_year: 2020,
            end_year: 2024,
            workers: 1,
            cleanup: CleanupMode::Manual,
        }
    }
}

impl WorkflowOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            filing_types: config.filing_types.clone(),
            start_year: config.start_year,
            end_year: config.end_year,
            workers: config.effective_workers(),
            cleanup: config.cleanup,
        }
    }

    /// True if a filing from `year` belongs in the report. Year 0 (unknown)
    /// is always kept.
    pub fn includes_year(&self, year: i32) -> bool {
        year == 0 || (self.start_year..=self.end_year).contains(&year)
    }
}

/// Scores every company's filings against one vocabulary.
pub struct IntensityWorkflow {
    repository: Arc<dyn FilingRepository>,
    engine: Arc<IntensityEngine>,
    options: WorkflowOptions,
    metrics: ScanMetrics,
}

impl IntensityWorkflow {
    pub fn new(
        repository: Arc<dyn FilingRepository>,
        engine: Arc<IntensityEngine>,
        options: WorkflowOptions,
    ) -> Self {
        Self {
            repository,
            engine,
            options,
            metrics: ScanMetrics::new(),
        }
    }

    pub fn options(&self) -> &WorkflowOptions {
        &self.options
    }

    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    /// Process all companies and return the flattened records.
    ///
    /// A company that fails is logged and counted; the others still run.
    /// Records come back in completion order.
    pub async fn run(&self, companies: &[Company]) -> Vec<FilingRecord> {
        let workers = self.options.workers.max(1);
        info!(
            "Processing {} companies with {} worker(s)",
            companies.len(),
            workers
        );

        let results = stream::iter(companies)
            .map(|company| async move {
                match self.process_company(company).await {
                    Ok(records) => {
                        self.metrics.record_company_processed();
                        info!("{}: {} filing(s) processed", company.edgar, records.len());
                        records
                    }
                    Err(e) => {
                        self.metrics.record_company_failed();
                        warn!("{}: processing failed: {}", company.edgar, e);
                        Vec::new()
                    }
                }
            })
            .buffer_unordered(workers)
            .collect::<Vec<_>>()
            .await;

        results.into_iter().flatten().collect()
    }

    /// Score every submission of one company.
    ///
    /// Unreadable submissions are skipped with a warning.
    pub async fn process_company(&self, company: &Company) -> FilingResult<Vec<FilingRecord>> {
        let submissions = self
            .repository
            .list_submissions(&company.edgar, &self.options.filing_types)
            .await?;

        if submissions.is_empty() {
            self.metrics.record_company_without_filings();
            warn!(
                "{}: no submission files found for filing types '{}'",
                company.edgar,
                self.options.filing_types.join(", ")
            );
            return Ok(Vec::new());
        }

        debug!(
            "{}: found {} submission file(s)",
            company.edgar,
            submissions.len()
        );

        let mut records = Vec::with_capacity(submissions.len());
        for submission in &submissions {
            let raw = match self.repository.read_submission(submission).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("{}: skipping unreadable submission: {}", company.edgar, e);
                    continue;
                }
            };

            let (year, score) = self.score_submission(submission, raw).await?;

            if !self.options.includes_year(year) {
                self.metrics.record_filing_skipped();
                debug!(
                    "{}: {} filed in {} is outside {}-{}",
                    company.edgar,
                    submission,
                    year,
                    self.options.start_year,
                    self.options.end_year
                );
                continue;
            }

            records.push(FilingRecord::new(company, year, score.result));
        }

        if self.options.cleanup == CleanupMode::Auto {
            match self
                .repository
                .cleanup(&company.edgar, &self.options.filing_types)
                .await
            {
                Ok(freed) => {
                    self.metrics.record_bytes_freed(freed);
                    debug!(
                        "{}: cleaned up {:.1} MB",
                        company.edgar,
                        freed as f64 / 1_048_576.0
                    );
                }
                Err(e) => warn!("{}: cleanup failed: {}", company.edgar, e),
            }
        }

        Ok(records)
    }

    /// Extract, score and date one submission on the blocking pool.
    async fn score_submission(
        &self,
        submission: &Submission,
        raw: String,
    ) -> FilingResult<(i32, DocumentScore)> {
        let engine = self.engine.clone();
        let timer = ScanTimer::new(self.metrics.clone());
        let path = submission.path.clone();

        let (year, score) = tokio::task::spawn_blocking(move || {
            let text = extract_text_content(&raw);
            let score = engine.score(&text);
            (filing_year(&raw, &path), score)
        })
        .await
        .map_err(|e| FilingError::TaskJoin(e.to_string()))?;

        timer.complete(score.token_count, score.result.total);
        Ok((year, score))
    }
}
