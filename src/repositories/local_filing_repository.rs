use crate::domain::EdgarTicker;
use crate::error::{FilingError, FilingResult};
use crate::models::Submission;
use crate::repositories::traits::FilingRepository;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File names a downloaded submission may have.
pub const SUBMISSION_FILE_NAMES: [&str; 2] = ["full-submission.txt", "submission.txt"];

/// Filing repository over a local download directory.
///
/// Downloaders lay filings out in several ways, so each ticker and filing type
/// is looked up under four candidate roots. When none of them holds a
/// submission the whole directory is searched for a directory named after the
/// ticker.
/// Filesystem work runs on the blocking pool.
#[derive(Debug, Clone)]
pub struct LocalFilingRepository {
    root: Arc<PathBuf>,
}

impl LocalFilingRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories that may hold `ticker`'s filings of one type.
    pub fn candidate_roots(&self, ticker: &EdgarTicker, filing_type: &str) -> [PathBuf; 4] {
        candidate_roots(&self.root, ticker.as_str(), filing_type)
    }
}

fn candidate_roots(root: &Path, ticker: &str, filing_type: &str) -> [PathBuf; 4] {
    [
        root.join(filing_type).join(ticker),
        root.join(ticker).join(filing_type),
        root.join("filings").join(ticker).join(filing_type),
        root.join("filings").join(filing_type).join(ticker),
    ]
}

fn is_submission_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| SUBMISSION_FILE_NAMES.contains(&name))
}

/// Submission files under `dir`, in file name order. Unreadable entries are
/// skipped.
fn submission_files(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_submission_file(entry.path()))
        .map(|entry| entry.into_path())
}

/// True if a directory between `root` and `path` is named `ticker`, ignoring
/// case.
fn names_ticker(root: &Path, path: &Path, ticker: &str) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .any(|component| component.as_os_str().to_string_lossy().eq_ignore_ascii_case(ticker))
}

fn discover_submissions(root: &Path, ticker: &str, filing_types: &[String]) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = filing_types
        .iter()
        .flat_map(|filing_type| candidate_roots(root, ticker, filing_type))
        .filter(|dir| dir.is_dir())
        .flat_map(|dir| submission_files(&dir).collect::<Vec<_>>())
        .collect();

    if found.is_empty() && root.is_dir() {
        found = submission_files(root)
            .filter(|path| names_ticker(root, path, ticker))
            .collect();
        if !found.is_empty() {
            debug!(
                "{}: {} submission(s) found by scanning {}",
                ticker,
                found.len(),
                root.display()
            );
        }
    }

    let mut seen = HashSet::new();
    found.retain(|path| seen.insert(path.clone()));
    found
}

/// Total size of the regular files under `path`.
fn tree_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|meta| meta.len())
        .sum()
}

/// Delete a directory tree, returning the bytes it held.
///
/// A missing directory frees nothing and is not an error.
pub fn remove_tree(path: &Path) -> FilingResult<u64> {
    if !path.exists() {
        return Ok(0);
    }

    let size = tree_size(path);
    std::fs::remove_dir_all(path).map_err(|source| FilingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(size)
}

#[async_trait]
impl FilingRepository for LocalFilingRepository {
    async fn list_submissions(
        &self,
        ticker: &EdgarTicker,
        filing_types: &[String],
    ) -> FilingResult<Vec<Submission>> {
        let root = self.root.clone();
        let ticker = ticker.as_str().to_string();
        let filing_types = filing_types.to_vec();

        let paths = tokio::task::spawn_blocking(move || {
            discover_submissions(&root, &ticker, &filing_types)
        })
        .await
        .map_err(|e| FilingError::TaskJoin(e.to_string()))?;

        Ok(paths.into_iter().map(Submission::new).collect())
    }

    async fn read_submission(&self, submission: &Submission) -> FilingResult<String> {
        let path = submission.path.clone();

        tokio::task::spawn_blocking(move || {
            std::fs::read(&path)
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .map_err(|source| FilingError::Io { path, source })
        })
        .await
        .map_err(|e| FilingError::TaskJoin(e.to_string()))?
    }

    async fn cleanup(&self, ticker: &EdgarTicker, filing_types: &[String]) -> FilingResult<u64> {
        let roots: Vec<PathBuf> = filing_types
            .iter()
            .flat_map(|filing_type| self.candidate_roots(ticker, filing_type))
            .collect();

        tokio::task::spawn_blocking(move || {
            let mut freed = 0;
            for dir in roots {
                match remove_tree(&dir) {
                    Ok(bytes) => freed += bytes,
                    Err(e) => warn!("Cleanup skipped: {}", e),
                }
            }
            freed
        })
        .await
        .map_err(|e| FilingError::TaskJoin(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_roots_layouts() {
        let repo = LocalFilingRepository::new("/dl");
        let ticker = EdgarTicker::from_ric("AAPL.OQ").unwrap();
        let roots = repo.candidate_roots(&ticker, "10-K");
        assert_eq!(roots[0], PathBuf::from("/dl/10-K/AAPL"));
        assert_eq!(roots[1], PathBuf::from("/dl/AAPL/10-K"));
        assert_eq!(roots[2], PathBuf::from("/dl/filings/AAPL/10-K"));
        assert_eq!(roots[3], PathBuf::from("/dl/filings/10-K/AAPL"));
    }

    #[test]
    fn test_is_submission_file() {
        assert!(is_submission_file(Path::new("a/b/full-submission.txt")));
        assert!(is_submission_file(Path::new("submission.txt")));
        assert!(!is_submission_file(Path::new("a/b/primary-document.html")));
    }

    #[test]
    fn test_remove_missing_tree_frees_nothing() {
        assert_eq!(remove_tree(Path::new("/nonexistent/ai-intensity")).unwrap(), 0);
    }
}
