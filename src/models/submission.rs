//! Submission model locating one downloaded filing.

use std::fmt;
use std::path::PathBuf;

/// A full-submission text file found for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Submission {
    /// Location of the submission file
    pub path: PathBuf,
}

impl Submission {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
