//! Text normalization shared by documents and keyword phrases.
//!
//! Both sides of a match go through the same [`Normalizer`], so a phrase such
//! as "Semi-Supervised Learning" and the document text "semi‑supervised
//! learning" reduce to identical token sequences.

use regex::Regex;

/// A normalized word: lowercase ASCII letters and digits only.
pub type Token = String;

/// Angle-bracket delimited markup, e.g. `<p>` or `<font size="2">`.
const HTML_TAG_PATTERN: &str = r"<[^>]+>";

/// "a.i.", "A.I", "a . i" as a whole word.
const AI_ABBREVIATION_PATTERN: &str = r"\ba\s*\.\s*i\.?\b";

/// ASCII hyphen plus the common Unicode hyphen/dash/minus variants.
const DASH_PATTERN: &str = "[-\u{2010}-\u{2015}\u{2212}\u{FE58}\u{FE63}\u{FF0D}]";

/// Lowercases, strips markup and punctuation, and splits text into tokens.
///
/// The compiled patterns are owned by the value. Build one `Normalizer` at
/// start-up and share it (it is `Send + Sync`); constructing one per document
/// would recompile the patterns every time.
#[derive(Debug, Clone)]
pub struct Normalizer {
    html_tags: Regex,
    ai_abbreviation: Regex,
    dashes: Regex,
}

impl Normalizer {
    /// Compile the normalization patterns.
    pub fn new() -> Self {
        Self {
            html_tags: Regex::new(HTML_TAG_PATTERN).expect("Failed to compile HTML tag regex"),
            ai_abbreviation: Regex::new(AI_ABBREVIATION_PATTERN)
                .expect("Failed to compile A.I. abbreviation regex"),
            dashes: Regex::new(DASH_PATTERN).expect("Failed to compile dash regex"),
        }
    }

    /// Normalize raw text into an ordered token sequence.
    ///
    /// Steps, in order: lowercase; replace tags with a space; collapse the
    /// "a.i." abbreviation to `ai`; replace dashes with a space; drop every
    /// character that is not an ASCII letter, ASCII digit or whitespace; split
    /// on whitespace. Never fails; empty or whitespace-only input yields an
    /// empty sequence.
    pub fn normalize(&self, text: &str) -> Vec<Token> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let untagged = self.html_tags.replace_all(&lowered, " ");
        let abbreviated = self.ai_abbreviation.replace_all(&untagged, "ai");
        let undashed = self.dashes.replace_all(&abbreviated, " ");

        tokenize_ascii(&undashed)
    }

    /// Normalize and re-join with single spaces.
    ///
    /// This is the canonical string form used as the per-keyword result key.
    pub fn canonical(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop non-alphanumeric characters and split on whitespace in one pass.
///
/// Removed characters do not break a word: "don't" becomes `dont`. Any
/// Unicode whitespace separates tokens, so runs of whitespace collapse and
/// leading/trailing whitespace disappears.
fn tokenize_ascii(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            current.push(ch);
        } else if ch.is_whitespace() && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
