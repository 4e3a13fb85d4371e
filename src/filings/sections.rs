//! Textual section extraction from SEC full-submission files.
//!
//! A full submission bundles many `<DOCUMENT>` blocks: the filing itself plus
//! graphics, PDFs, spreadsheets and XBRL data. Binary blocks are often most of
//! the file and carry no prose, so only textual blocks are kept for scoring.

use once_cell::sync::Lazy;
use regex::Regex;

static DOCUMENT_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<DOCUMENT>").expect("Failed to compile DOCUMENT start regex"));

static DOCUMENT_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<DOCUMENT>(.*?)</DOCUMENT>").expect("Failed to compile DOCUMENT block regex")
});

static DOCUMENT_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<TYPE>\s*([^\n\r<]+)").expect("Failed to compile DOCUMENT type regex")
});

/// `<TYPE>` is expected near the top of a block.
const TYPE_SEARCH_CHARS: usize = 200;

/// Document types that hold no prose worth scanning.
pub const BINARY_DOCUMENT_TYPES: &[&str] = &[
    "GRAPHIC", "ZIP", "EXCEL", "PDF", "XBRL", "JSON", "COVER", "JPG", "JPEG", "PNG", "GIF",
    "BMP", "TIFF",
];

/// True if a `<TYPE>` value names a binary attachment.
///
/// Matches exact names and names containing one (e.g. `EX-101.XBRL`).
pub fn is_binary_type(doc_type: &str) -> bool {
    let upper = doc_type.trim().to_uppercase();
    BINARY_DOCUMENT_TYPES
        .iter()
        .any(|binary| upper.contains(binary))
}

/// Keep the submission header and every textual `<DOCUMENT>` body.
///
/// Text without any `<DOCUMENT>` marker is returned unchanged. Blocks without
/// a `<TYPE>` tag are kept.
pub fn extract_text_content(raw: &str) -> String {
    let Some(first_doc) = DOCUMENT_START_RE.find(raw) else {
        return raw.to_string();
    };

    let mut parts: Vec<&str> = vec![&raw[..first_doc.start()]];

    for caps in DOCUMENT_BLOCK_RE.captures_iter(raw) {
        let Some(body) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };

        let head_end = body
            .char_indices()
            .nth(TYPE_SEARCH_CHARS)
            .map_or(body.len(), |(idx, _)| idx);

        if let Some(doc_type) = DOCUMENT_TYPE_RE
            .captures(&body[..head_end])
            .and_then(|c| c.get(1))
        {
            if is_binary_type(doc_type.as_str()) {
                continue;
            }
        }

        parts.push(body);
    }

    parts.join("\n")
}
