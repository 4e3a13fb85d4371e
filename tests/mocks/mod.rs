mod mock_filing_repository;

#[allow(unused_imports)]
pub use mock_filing_repository::MockFilingRepository;
