//! Normalizer and keyword index bundled for document scoring.

use crate::intensity::keyword_index::KeywordIndex;
use crate::intensity::normalizer::{Normalizer, Token};
use crate::intensity::scanner::{scan, ScanResult};

/// Scores documents against one fixed vocabulary.
///
/// Immutable after construction; wrap it in an `Arc` to share it between
/// worker tasks.
#[derive(Debug, Clone)]
pub struct IntensityEngine {
    normalizer: Normalizer,
    index: KeywordIndex,
}

/// Scan outcome for one document plus the number of tokens scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentScore {
    pub result: ScanResult,
    pub token_count: usize,
}

impl IntensityEngine {
    /// Build the index for `phrases` with a fresh normalizer.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_normalizer(Normalizer::new(), phrases)
    }

    /// Build the index for `phrases` with an existing normalizer.
    pub fn with_normalizer<I, S>(normalizer: Normalizer, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = KeywordIndex::build(&normalizer, phrases);
        Self { normalizer, index }
    }

    /// Normalize `text` once and scan it.
    pub fn score(&self, text: &str) -> DocumentScore {
        let tokens = self.normalize(text);
        DocumentScore {
            result: scan(&tokens, &self.index),
            token_count: tokens.len(),
        }
    }

    pub fn normalize(&self, text: &str) -> Vec<Token> {
        self.normalizer.normalize(text)
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }
}
