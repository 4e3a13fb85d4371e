//! Keyword vocabulary loading.
//!
//! A keyword file holds one phrase per line. Blank lines and lines starting
//! with `#` are ignored and duplicates are dropped, keeping the first
//! occurrence. Loading never fails: an unreadable or empty file falls back to
//! the built-in vocabulary, and the fallback reason is reported through
//! [`KeywordOrigin`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Built-in AI vocabulary used when no keyword file is configured.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    // Core AI / ML
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "data science",
    "cognitive computing",
    // Architectures
    "neural network",
    "neural networks",
    "transformer",
    "transformers",
    "large language model",
    "large language models",
    "foundation model",
    "foundation models",
    "generative ai",
    // Learning approaches
    "supervised learning",
    "unsupervised learning",
    "semi-supervised learning",
    "reinforcement learning",
    "model training",
    "model inference",
    "training data",
    // Language
    "natural language processing",
    "natural language understanding",
    "chatbot",
    "chatbots",
    "speech recognition",
    "voice recognition",
    // Vision
    "computer vision",
    "machine vision",
    "image recognition",
    "facial recognition",
    // Applications
    "predictive analytics",
    "predictive modeling",
    "anomaly detection",
    "recommendation system",
    "recommendation systems",
    "robotic process automation",
];

/// Where a loaded keyword list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordOrigin {
    /// No source was given; the built-in vocabulary was used
    BuiltIn,

    /// Phrases were read from the given file
    File(PathBuf),

    /// A source was given but could not be used
    Fallback { path: PathBuf, reason: String },
}

/// A keyword list together with its origin.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    pub phrases: Vec<String>,
    pub origin: KeywordOrigin,
}

impl KeywordSet {
    /// True when a configured source had to be replaced by the defaults.
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, KeywordOrigin::Fallback { .. })
    }
}

/// The built-in vocabulary as owned strings.
pub fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|kw| kw.to_string()).collect()
}

/// Load keyword phrases, falling back to the built-in vocabulary.
pub fn load_keywords(source: Option<&Path>) -> Vec<String> {
    load_keywords_with_origin(source).phrases
}

/// Load keyword phrases and report where they came from.
///
/// Read failures and files without any usable line are logged at `warn`
/// level and produce [`KeywordOrigin::Fallback`].
pub fn load_keywords_with_origin(source: Option<&Path>) -> KeywordSet {
    let Some(path) = source else {
        return KeywordSet {
            phrases: default_keywords(),
            origin: KeywordOrigin::BuiltIn,
        };
    };

    let fallback = |reason: String| {
        warn!(
            path = %path.display(),
            reason = %reason,
            "Keyword file unusable, falling back to built-in vocabulary"
        );
        KeywordSet {
            phrases: default_keywords(),
            origin: KeywordOrigin::Fallback {
                path: path.to_path_buf(),
                reason,
            },
        }
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return fallback(format!("read failed: {}", e)),
    };

    let phrases = parse_keyword_lines(&String::from_utf8_lossy(&bytes));
    if phrases.is_empty() {
        return fallback("no keywords found".to_string());
    }

    debug!(path = %path.display(), count = phrases.len(), "Loaded keyword file");

    KeywordSet {
        phrases,
        origin: KeywordOrigin::File(path.to_path_buf()),
    }
}

/// Parse line-oriented keyword content.
///
/// Each line is trimmed; empty lines and `#` comments are skipped; exact
/// duplicates are removed while preserving first-seen order.
pub fn parse_keyword_lines(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut phrases = Vec::new();

    for line in content.lines() {
        let phrase = line.trim();
        if phrase.is_empty() || phrase.starts_with('#') {
            continue;
        }
        if seen.insert(phrase) {
            phrases.push(phrase.to_string());
        }
    }

    phrases
}
