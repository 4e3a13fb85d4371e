//! Keyword intensity scoring.
//!
//! This module turns free-form text into a count of vocabulary occurrences:
//!
//! - **normalizer**: lowercases and cleans text into ASCII tokens
//! - **keywords**: built-in vocabulary and keyword file loading
//! - **keyword_index**: first-token index of canonical phrases, longest first
//! - **scanner**: single-pass, non-overlapping, longest-match-first counting
//! - **engine**: normalizer plus index, shared across workers

pub mod engine;
pub mod keyword_index;
pub mod keywords;
pub mod normalizer;
pub mod scanner;

pub use engine::{DocumentScore, IntensityEngine};
pub use keyword_index::{KeywordCandidate, KeywordIndex};
pub use keywords::{
    default_keywords, load_keywords, load_keywords_with_origin, parse_keyword_lines,
    KeywordOrigin, KeywordSet, DEFAULT_KEYWORDS,
};
pub use normalizer::{Normalizer, Token};
pub use scanner::{find_matches, scan, KeywordMatch, ScanResult};
