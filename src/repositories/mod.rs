mod local_filing_repository;
mod traits;

pub use local_filing_repository::{remove_tree, LocalFilingRepository, SUBMISSION_FILE_NAMES};
pub use traits::FilingRepository;
