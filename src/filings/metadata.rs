//! Filing year extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static HEADER_DATE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)FILED\s+AS\s+OF\s+DATE:\s*([0-9]{8})",
        r"(?i)CONFORMED\s+PERIOD\s+OF\s+REPORT:\s*([0-9]{8})",
        r"(?i)FILING\s+DATE:\s*([0-9]{8})",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Failed to compile header date regex"))
    .collect()
});

static PATH_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(20[0-9]{2})").expect("Failed to compile path year regex"));

/// Year from the first SEC header date found, tried in a fixed order.
pub fn extract_year_from_text(text: &str) -> Option<i32> {
    HEADER_DATE_RES.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|date| date.as_str()[..4].parse().ok())
    })
}

/// First `20xx` appearing anywhere in the path.
pub fn extract_year_from_path(path: &Path) -> Option<i32> {
    let path = path.to_string_lossy();
    PATH_YEAR_RE
        .captures(&path)
        .and_then(|caps| caps.get(1))
        .and_then(|year| year.as_str().parse().ok())
}

/// Filing year from the header, then the path; 0 when unknown.
pub fn filing_year(text: &str, path: &Path) -> i32 {
    extract_year_from_text(text)
        .or_else(|| extract_year_from_path(path))
        .unwrap_or(0)
}
