//! AI Intensity - Main entry point
//!
//! Scores the downloaded SEC filings of every listed company and writes the
//! intensity report.

use ai_intensity::domain::load_company_list;
use ai_intensity::intensity::load_keywords_with_origin;
use ai_intensity::repositories::{remove_tree, FilingRepository, LocalFilingRepository};
use ai_intensity::{
    CleanupMode, Config, IntensityEngine, IntensityReport, IntensityWorkflow, WorkflowOptions,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr; RUST_LOG wins over LOG_LEVEL
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let companies = load_company_list(&config.companies_file)
        .with_context(|| format!("loading {}", config.companies_file.display()))?;

    info!(
        "Loaded {} companies from {}",
        companies.len(),
        config.companies_file.display()
    );
    if companies.is_empty() {
        warn!("No tickers to process. Exiting.");
        return Ok(());
    }

    let preview: Vec<String> = companies
        .iter()
        .take(10)
        .map(|c| format!("{}->{}", c.symbol, c.edgar))
        .collect();
    debug!(
        "Preview: {}{}",
        preview.join(", "),
        if companies.len() > 10 { " ..." } else { "" }
    );

    let keywords = load_keywords_with_origin(config.keywords_file.as_deref());
    debug!("Keyword source: {:?}", keywords.origin);
    let engine = Arc::new(IntensityEngine::new(&keywords.phrases));
    info!(
        "Keyword index ready: {} phrases in {} buckets",
        engine.index().phrase_count(),
        engine.index().bucket_count()
    );

    let repository =
        Arc::new(LocalFilingRepository::new(&config.filings_dir)) as Arc<dyn FilingRepository>;
    let workflow = IntensityWorkflow::new(
        repository,
        engine,
        WorkflowOptions::from_config(&config),
    );

    info!("Starting workflow over {}", config.filings_dir.display());
    let records = workflow.run(&companies).await;
    info!("Workflow completed. Rows: {}", records.len());

    let report = IntensityReport::build(&records);
    let written = report
        .write_report(&config.report_path())
        .context("writing report")?;
    info!("Report saved to: {}", written.display());

    let summary = workflow.metrics().summary();
    info!(
        "Companies: {} processed, {} failed, {} without filings",
        summary.companies_processed, summary.companies_failed, summary.companies_without_filings
    );
    info!(
        "Filings: {} scanned, {} outside the year window, {} tokens, {} matches, avg scan {:.1}ms",
        summary.filings_scanned,
        summary.filings_skipped,
        summary.tokens_scanned,
        summary.matches_total,
        summary.scan_duration_avg_ms
    );

    if config.cleanup == CleanupMode::Auto {
        match remove_tree(&config.filings_dir) {
            Ok(0) => info!("Cleaned up empty download directory"),
            Ok(freed) => info!(
                "Cleaned up download directory ({:.1} MB freed)",
                freed as f64 / 1_048_576.0
            ),
            Err(e) => warn!("Could not fully clean download directory: {}", e),
        }
    }

    Ok(())
}
