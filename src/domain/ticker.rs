//! Company symbols and their EDGAR ticker form.
//!
//! Input lists use Refinitiv-style instrument codes (RICs) such as `AAPL.OQ`,
//! `BRKb.N` or `BF/B`. SEC EDGAR indexes filings by plain tickers with a
//! hyphenated share class (`AAPL`, `BRK-B`, `BF-B`).

use super::errors::ValidationError;
use crate::error::{CompanyListError, CompanyListResult};
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// A type-safe EDGAR ticker.
///
/// # Example
///
/// ```
/// use ai_intensity::domain::EdgarTicker;
///
/// let ticker = EdgarTicker::from_ric("BRKb.N").unwrap();
/// assert_eq!(ticker.as_str(), "BRK-B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgarTicker(String);

impl EdgarTicker {
    /// Translate a RIC into an EDGAR ticker.
    ///
    /// - `BF/B` becomes `BF-B`
    /// - the exchange suffix after the first `.` is dropped
    /// - a trailing lowercase share class becomes `-X` (`BRKb` to `BRK-B`)
    /// - the result is uppercased
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptySymbol` for blank input and
    /// `ValidationError::InvalidSymbol` when nothing is left after the
    /// translation (e.g. `.N`).
    pub fn from_ric(ric: &str) -> Result<Self, ValidationError> {
        let s = ric.trim();
        if s.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let ticker = if let Some((class_root, class)) = s.split_once('/') {
            format!("{}-{}", class_root.to_uppercase(), class.to_uppercase())
        } else {
            let prefix = s.split_once('.').map_or(s, |(pre, _)| pre);
            let with_class = match prefix.chars().last() {
                Some(last) if last.is_lowercase() && prefix.len() > last.len_utf8() => {
                    let root = &prefix[..prefix.len() - last.len_utf8()];
                    format!("{}-{}", root, last.to_uppercase())
                }
                _ => prefix.to_string(),
            };
            with_class.to_uppercase()
        };

        if ticker.is_empty() || ticker.starts_with('-') || ticker.ends_with('-') {
            return Err(ValidationError::InvalidSymbol(s.to_string()));
        }

        Ok(Self(ticker))
    }

    /// Get the ticker as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgarTicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EdgarTicker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// A company to process: the symbol as listed and its EDGAR ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Symbol as it appears in the input list, uppercased
    pub symbol: String,

    /// Ticker used to locate filings
    pub edgar: EdgarTicker,
}

impl Company {
    pub fn from_ric(ric: &str) -> Result<Self, ValidationError> {
        let edgar = EdgarTicker::from_ric(ric)?;
        Ok(Self {
            symbol: ric.trim().to_uppercase(),
            edgar,
        })
    }
}

/// Parse a company list.
///
/// One symbol per line, or CSV. When the first non-comment line has a
/// `Ticker` column it is treated as a header and that column is read from
/// every row; otherwise the first comma-separated field is used. Blank lines
/// and `#` comments are ignored. Rows without a usable symbol are skipped
/// with a warning. Companies are de-duplicated by EDGAR ticker, first
/// occurrence winning.
pub fn parse_company_list(content: &str) -> Vec<Company> {
    let mut rows = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .peekable();

    let mut column = 0;
    if let Some(&(_, first)) = rows.peek() {
        if let Some(idx) = csv_fields(first).position(|f| f.eq_ignore_ascii_case("ticker")) {
            column = idx;
            rows.next();
        }
    }

    let mut seen = HashSet::new();
    let mut companies = Vec::new();

    for (line_no, line) in rows {
        let Some(field) = csv_fields(line).nth(column) else {
            warn!(line = line_no, "Company list row has no ticker column, skipping");
            continue;
        };

        let company = match Company::from_ric(field) {
            Ok(company) => company,
            Err(e) => {
                warn!(line = line_no, reason = %e, "Skipping company list row");
                continue;
            }
        };

        if seen.insert(company.edgar.clone()) {
            companies.push(company);
        }
    }

    companies
}

/// Trimmed, unquoted comma-separated fields.
fn csv_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(|field| field.trim().trim_matches('"').trim())
}

/// Read and parse a company list file.
pub fn load_company_list(path: &Path) -> CompanyListResult<Vec<Company>> {
    let content = std::fs::read_to_string(path).map_err(|source| CompanyListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_company_list(&content))
}
