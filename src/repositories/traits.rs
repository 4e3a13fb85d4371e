use crate::domain::EdgarTicker;
use crate::error::FilingResult;
use crate::models::Submission;
use async_trait::async_trait;

/// Repository for downloaded filings.
///
/// Abstracts where submissions live so the workflow can run against the
/// local download directory or an in-memory mock.
#[async_trait]
pub trait FilingRepository: Send + Sync {
    /// Find the submissions for `ticker` across the given filing types.
    ///
    /// An empty list is not an error.
    async fn list_submissions(
        &self,
        ticker: &EdgarTicker,
        filing_types: &[String],
    ) -> FilingResult<Vec<Submission>>;

    /// Read the full text of a submission.
    async fn read_submission(&self, submission: &Submission) -> FilingResult<String>;

    /// Delete the stored filings for `ticker`, returning the bytes freed.
    async fn cleanup(&self, ticker: &EdgarTicker, filing_types: &[String]) -> FilingResult<u64>;
}
