use ai_intensity::domain::EdgarTicker;
use ai_intensity::error::{FilingError, FilingResult};
use ai_intensity::models::Submission;
use ai_intensity::repositories::FilingRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock filing repository for testing.
///
/// Submissions are kept in memory keyed by EDGAR ticker; a ticker can be
/// marked as failing to exercise error handling.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockFilingRepository {
    filings: Arc<Mutex<HashMap<String, Vec<(Submission, String)>>>>,
    failing: Arc<Mutex<Vec<String>>>,
    unreadable: Arc<Mutex<Vec<PathBuf>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockFilingRepository {
    pub fn new() -> Self {
        Self {
            filings: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(Vec::new())),
            unreadable: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a submission with the given path and text.
    pub fn add_filing(&self, ticker: &str, path: &str, text: &str) {
        let mut filings = self.filings.lock().unwrap();
        filings
            .entry(ticker.to_string())
            .or_default()
            .push((Submission::new(path), text.to_string()));
    }

    /// Make `list_submissions` fail for a ticker.
    pub fn fail_ticker(&self, ticker: &str) {
        self.failing.lock().unwrap().push(ticker.to_string());
    }

    /// Make `read_submission` fail for a path.
    pub fn fail_read(&self, path: &str) {
        self.unreadable.lock().unwrap().push(PathBuf::from(path));
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockFilingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FilingRepository for MockFilingRepository {
    async fn list_submissions(
        &self,
        ticker: &EdgarTicker,
        _filing_types: &[String],
    ) -> FilingResult<Vec<Submission>> {
        self.track_call("list_submissions");

        if self.failing.lock().unwrap().iter().any(|t| t == ticker.as_str()) {
            return Err(FilingError::Other(format!("listing failed for {}", ticker)));
        }

        let filings = self.filings.lock().unwrap();
        Ok(filings
            .get(ticker.as_str())
            .map(|subs| subs.iter().map(|(s, _)| s.clone()).collect())
            .unwrap_or_default())
    }

    async fn read_submission(&self, submission: &Submission) -> FilingResult<String> {
        self.track_call("read_submission");

        if self.unreadable.lock().unwrap().contains(&submission.path) {
            return Err(FilingError::Io {
                path: submission.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            });
        }

        let filings = self.filings.lock().unwrap();
        filings
            .values()
            .flatten()
            .find(|(s, _)| s == submission)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| FilingError::Other(format!("unknown submission {}", submission)))
    }

    async fn cleanup(&self, ticker: &EdgarTicker, _filing_types: &[String]) -> FilingResult<u64> {
        self.track_call("cleanup");

        let mut filings = self.filings.lock().unwrap();
        let freed = filings
            .remove(ticker.as_str())
            .map(|subs| subs.iter().map(|(_, text)| text.len() as u64).sum())
            .unwrap_or(0);
        Ok(freed)
    }
}
