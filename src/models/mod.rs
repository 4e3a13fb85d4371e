//! Data models for filings and their scores.
//!
//! A `Submission` locates one filing on disk; a `FilingRecord` is the scored
//! row that feeds the report.

pub mod filing_record;
pub mod submission;

pub use filing_record::FilingRecord;
pub use submission::Submission;
