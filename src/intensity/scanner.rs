//! Non-overlapping, longest-match-first keyword counting.
//!
//! The scan walks the token sequence once, left to right. At each position it
//! tries the candidates of the position's bucket in index order (longest
//! first, then lexicographic) and takes the first one that matches over
//! positions not yet claimed. A match claims its whole span and the scan
//! resumes after it, so every counted occurrence is disjoint from every other.
//!
//! The policy is greedy and local: it does not search for the assignment that
//! maximizes the total count. With the phrases "a", "a b" and "b c", the text
//! "a b c" yields one match ("a b") even though "a" followed by "b c" would
//! have yielded two.

use crate::intensity::keyword_index::{KeywordCandidate, KeywordIndex};
use crate::intensity::normalizer::Token;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Range;

/// Outcome of scanning one token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Total number of non-overlapping matches
    pub total: u32,

    /// Matches per canonical phrase; phrases with no match are absent
    pub per_keyword: BTreeMap<String, u32>,
}

impl ScanResult {
    /// Count for one canonical phrase, zero if absent.
    pub fn count(&self, phrase: &str) -> u32 {
        self.per_keyword.get(phrase).copied().unwrap_or(0)
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// A single counted occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    /// Token positions covered by the match
    pub span: Range<usize>,

    /// Canonical phrase that matched
    pub phrase: &'a str,
}

/// Count keyword occurrences in `tokens`.
pub fn scan(tokens: &[Token], index: &KeywordIndex) -> ScanResult {
    let mut result = ScanResult::default();

    for_each_match(tokens, index, |candidate, _| {
        result.total += 1;
        *result
            .per_keyword
            .entry(candidate.phrase().to_string())
            .or_insert(0) += 1;
    });

    result
}

/// List every counted occurrence with its token span, in text order.
///
/// Uses exactly the same selection as [`scan`]; useful for inspecting why a
/// document scored the way it did.
pub fn find_matches<'a>(tokens: &[Token], index: &'a KeywordIndex) -> Vec<KeywordMatch<'a>> {
    let mut matches = Vec::new();

    for_each_match(tokens, index, |candidate, span| {
        matches.push(KeywordMatch {
            span,
            phrase: candidate.phrase(),
        });
    });

    matches
}

fn for_each_match<'a, F>(tokens: &[Token], index: &'a KeywordIndex, mut on_match: F)
where
    F: FnMut(&'a KeywordCandidate, Range<usize>),
{
    let n = tokens.len();
    let mut consumed = vec![false; n];
    let mut i = 0;

    while i < n {
        if consumed[i] {
            i += 1;
            continue;
        }

        let Some(candidates) = index.candidates(&tokens[i]) else {
            i += 1;
            continue;
        };

        let hit = candidates.iter().find(|candidate| {
            let end = i + candidate.len();
            end <= n
                && tokens[i..end] == *candidate.tokens()
                && !consumed[i..end].iter().any(|&taken| taken)
        });

        match hit {
            Some(candidate) => {
                let end = i + candidate.len();
                consumed[i..end].fill(true);
                on_match(candidate, i..end);
                i = end;
            }
            None => i += 1,
        }
    }
}
