//! Helpers for SEC full-submission text files.

pub mod metadata;
pub mod sections;

pub use metadata::{extract_year_from_path, extract_year_from_text, filing_year};
pub use sections::{extract_text_content, is_binary_type, BINARY_DOCUMENT_TYPES};
