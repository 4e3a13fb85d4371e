//! First-token keyword index.
//!
//! Phrases are bucketed by their first canonical token. Within a bucket the
//! candidates are ordered longest-first so that "machine learning" is tried
//! before "machine" at the same position; equal lengths are ordered by the
//! space-joined phrase so the order never depends on the input list.

use crate::intensity::normalizer::{Normalizer, Token};
use std::collections::HashMap;

/// One canonical keyword phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCandidate {
    tokens: Vec<Token>,
    phrase: String,
}

impl KeywordCandidate {
    fn new(tokens: Vec<Token>) -> Self {
        let phrase = tokens.join(" ");
        Self { tokens, phrase }
    }

    /// Canonical tokens of the phrase.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Space-joined canonical phrase; the key used in scan results.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Number of tokens in the phrase.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for indexed candidates; empty phrases are never stored.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Read-only lookup from a first token to its candidate phrases.
///
/// Built once and shared across scans; `KeywordIndex` is `Send + Sync` and
/// needs no locking.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    buckets: HashMap<Token, Vec<KeywordCandidate>>,
    phrase_count: usize,
}

impl KeywordIndex {
    /// Build an index from raw keyword phrases.
    ///
    /// Each phrase is normalized with `normalizer`. Phrases that normalize to
    /// nothing are skipped and phrases with identical canonical forms are
    /// stored once.
    pub fn build<I, S>(normalizer: &Normalizer, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: HashMap<Token, Vec<KeywordCandidate>> = HashMap::new();

        for raw in phrases {
            let tokens = normalizer.normalize(raw.as_ref());
            let Some(first) = tokens.first().cloned() else {
                continue;
            };
            buckets
                .entry(first)
                .or_default()
                .push(KeywordCandidate::new(tokens));
        }

        let mut phrase_count = 0;
        for candidates in buckets.values_mut() {
            candidates.sort_by(|a, b| {
                b.len()
                    .cmp(&a.len())
                    .then_with(|| a.phrase.cmp(&b.phrase))
            });
            candidates.dedup_by(|a, b| a.phrase == b.phrase);
            phrase_count += candidates.len();
        }

        Self {
            buckets,
            phrase_count,
        }
    }

    /// Candidates whose first token is `token`, longest first.
    pub fn candidates(&self, token: &str) -> Option<&[KeywordCandidate]> {
        self.buckets.get(token).map(Vec::as_slice)
    }

    /// Number of distinct first tokens.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct canonical phrases.
    pub fn phrase_count(&self) -> usize {
        self.phrase_count
    }

    /// True when no phrase survived normalization.
    pub fn is_empty(&self) -> bool {
        self.phrase_count == 0
    }

    /// All canonical phrases, sorted.
    pub fn phrases(&self) -> Vec<&str> {
        let mut phrases: Vec<&str> = self
            .buckets
            .values()
            .flat_map(|bucket| bucket.iter().map(KeywordCandidate::phrase))
            .collect();
        phrases.sort_unstable();
        phrases
    }
}
