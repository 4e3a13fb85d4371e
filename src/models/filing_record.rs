//! Scored filing row.

use crate::domain::Company;
use crate::intensity::ScanResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scored filing.
///
/// Serializes as a flat row: the fixed columns followed by one column per
/// matched canonical phrase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilingRecord {
    /// Symbol as listed in the companies file
    #[serde(rename = "Ticker")]
    pub ticker: String,

    /// Ticker the filing was found under
    #[serde(rename = "EDGAR_Ticker")]
    pub edgar_ticker: String,

    /// Filing year, 0 when unknown
    #[serde(rename = "Year")]
    pub year: i32,

    /// Total keyword matches in the filing
    #[serde(rename = "AI_Intensity_Score")]
    pub score: u32,

    /// Matches per canonical phrase
    #[serde(flatten)]
    pub keyword_counts: BTreeMap<String, u32>,
}

impl FilingRecord {
    pub fn new(company: &Company, year: i32, result: ScanResult) -> Self {
        Self {
            ticker: company.symbol.clone(),
            edgar_ticker: company.edgar.to_string(),
            year,
            score: result.total,
            keyword_counts: result.per_keyword,
        }
    }

    /// Count for one canonical phrase, zero if absent.
    pub fn keyword_count(&self, phrase: &str) -> u32 {
        self.keyword_counts.get(phrase).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FilingRecord {
        let company = Company::from_ric("BRKb.N").unwrap();
        let mut result = ScanResult::default();
        result.total = 3;
        result.per_keyword.insert("ai".to_string(), 2);
        result.per_keyword.insert("machine learning".to_string(), 1);
        FilingRecord::new(&company, 2023, result)
    }

    #[test]
    fn test_record_from_scan_result() {
        let record = sample();
        assert_eq!(record.ticker, "BRKB.N");
        assert_eq!(record.edgar_ticker, "BRK-B");
        assert_eq!(record.score, 3);
        assert_eq!(record.keyword_count("ai"), 2);
        assert_eq!(record.keyword_count("robotics"), 0);
    }

    #[test]
    fn test_record_serializes_flat() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Ticker"], "BRKB.N");
        assert_eq!(json["EDGAR_Ticker"], "BRK-B");
        assert_eq!(json["Year"], 2023);
        assert_eq!(json["AI_Intensity_Score"], 3);
        assert_eq!(json["machine learning"], 1);
        assert!(json.get("keyword_counts").is_none());
    }

    #[test]
    fn test_record_deserializes_flat() {
        let json = r#"{"Ticker":"AAPL.OQ","EDGAR_Ticker":"AAPL","Year":2021,"AI_Intensity_Score":4,"ai":4}"#;
        let record: FilingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.year, 2021);
        assert_eq!(record.keyword_count("ai"), 4);
    }
}
